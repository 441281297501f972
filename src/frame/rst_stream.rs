use super::{FrameType, GetFrameType};
use crate::{
    app_error::AppError,
    error::Error,
    primitives::{be_u16, IntoError},
    stream_id::StreamId,
    varint::be_varint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStreamFrame {
    pub stream_id: StreamId,
    pub app_error_code: AppError,
    pub final_offset: u64,
}

impl GetFrameType for RstStreamFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::RstStream
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], RstStreamFrame), Error> {
    let (input, stream_id) = be_varint(input).into_error()?;
    let (input, code) = be_u16(input, "app_error_code")?;
    let (input, final_offset) = be_varint(input).into_error()?;
    Ok((
        input,
        RstStreamFrame {
            stream_id: StreamId::from(stream_id),
            app_error_code: AppError::from(code),
            final_offset: final_offset.into_inner(),
        },
    ))
}
