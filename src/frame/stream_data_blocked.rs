use super::{FrameType, GetFrameType};
use crate::{
    error::Error,
    primitives::IntoError,
    stream_id::{StreamId, StreamOwner, StreamType},
    varint::be_varint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDataBlockedFrame {
    pub stream_id: StreamId,
    pub offset: u64,
}

impl GetFrameType for StreamDataBlockedFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::StreamDataBlocked
    }
}

impl StreamDataBlockedFrame {
    pub fn stream_owner(&self) -> StreamOwner {
        self.stream_id.owner()
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_id.stream_type()
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], StreamDataBlockedFrame), Error> {
    let (input, stream_id) = be_varint(input).into_error()?;
    let (input, offset) = be_varint(input).into_error()?;
    Ok((
        input,
        StreamDataBlockedFrame {
            stream_id: StreamId::from(stream_id),
            offset: offset.into_inner(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stream_id_and_offset() {
        let (rest, frame) = decode(&[0x05, 0x0a]).unwrap();
        assert!(rest.is_empty());
        assert_eq!(
            frame.stream_id,
            StreamId::from(crate::varint::VarInt::from_u32(5))
        );
        assert_eq!(frame.offset, 10);
        assert_eq!(frame.stream_owner(), StreamOwner::Server);
        assert_eq!(frame.stream_type(), StreamType::Bidirectional);
    }

    #[test]
    fn truncated_input_is_badarg() {
        assert!(matches!(decode(&[0x05]), Err(Error::Badarg(_))));
    }
}
