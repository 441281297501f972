use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxStreamIdFrame {
    pub max_stream_id: u64,
}

impl GetFrameType for MaxStreamIdFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::MaxStreamId
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], MaxStreamIdFrame), Error> {
    let (input, max_stream_id) = be_varint(input).into_error()?;
    Ok((
        input,
        MaxStreamIdFrame {
            max_stream_id: max_stream_id.into_inner(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_varint() {
        let (rest, frame) = decode(&[0x43, 0xe8]).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.max_stream_id, 1000);
    }

    #[test]
    fn empty_input_is_badarg() {
        assert!(matches!(decode(&[]), Err(Error::Badarg(_))));
    }
}
