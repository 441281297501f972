use super::{FrameType, GetFrameType};
use crate::{
    app_error::AppError,
    error::Error,
    primitives::{be_u16, IntoError},
    stream_id::StreamId,
    varint::be_varint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopSendingFrame {
    pub stream_id: StreamId,
    pub app_error_code: AppError,
}

impl GetFrameType for StopSendingFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::StopSending
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], StopSendingFrame), Error> {
    let (input, stream_id) = be_varint(input).into_error()?;
    let (input, code) = be_u16(input, "app_error_code")?;
    Ok((
        input,
        StopSendingFrame {
            stream_id: StreamId::from(stream_id),
            app_error_code: AppError::from(code),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stream_id_and_app_error_code() {
        let bytes = [0x05, 0x00, 0x2a];
        let (rest, frame) = decode(&bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            frame.stream_id,
            StreamId::from(crate::varint::VarInt::from_u32(5))
        );
        assert_eq!(frame.app_error_code, AppError::Code(0x2a));
    }

    #[test]
    fn stopping_sentinel_is_distinguished() {
        let bytes = [0x05, 0x00, 0x00];
        let (_, frame) = decode(&bytes).unwrap();
        assert_eq!(frame.app_error_code, AppError::Stopping);
    }

    #[test]
    fn truncated_input_is_badarg() {
        assert!(matches!(decode(&[0x05]), Err(Error::Badarg(_))));
    }
}
