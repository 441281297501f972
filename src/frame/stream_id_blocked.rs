use super::{FrameType, GetFrameType};
use crate::{
    error::Error, primitives::IntoError, stream_id::StreamId, varint::be_varint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamIdBlockedFrame {
    pub stream_id: StreamId,
}

impl GetFrameType for StreamIdBlockedFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::StreamIdBlocked
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], StreamIdBlockedFrame), Error> {
    let (input, stream_id) = be_varint(input).into_error()?;
    Ok((
        input,
        StreamIdBlockedFrame {
            stream_id: StreamId::from(stream_id),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_varint_stream_id() {
        let (rest, frame) = decode(&[0x07]).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            frame.stream_id,
            StreamId::from(crate::varint::VarInt::from_u32(7))
        );
    }

    #[test]
    fn empty_input_is_badarg() {
        assert!(matches!(decode(&[]), Err(Error::Badarg(_))));
    }
}
