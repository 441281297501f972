use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataBlockedFrame {
    pub offset: u64,
}

impl GetFrameType for DataBlockedFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::DataBlocked
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], DataBlockedFrame), Error> {
    let (input, offset) = be_varint(input).into_error()?;
    Ok((
        input,
        DataBlockedFrame {
            offset: offset.into_inner(),
        },
    ))
}
