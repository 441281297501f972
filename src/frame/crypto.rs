use bytes::Bytes;

use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoFrame {
    pub offset: u64,
    pub length: u64,
    pub payload: Bytes,
}

impl GetFrameType for CryptoFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::Crypto
    }
}

pub(super) fn decode<'a>(input: &'a [u8], raw: &Bytes) -> Result<(&'a [u8], CryptoFrame), Error> {
    let (input, offset) = be_varint(input).into_error()?;
    let (input, length) = be_varint(input).into_error()?;
    let len: usize = length.into();
    if input.len() < len {
        return Err(Error::truncated(format!(
            "crypto payload: need {len} bytes, have {}",
            input.len()
        )));
    }
    let start = raw.len() - input.len();
    let payload = raw.slice(start..start + len);
    Ok((
        &input[len..],
        CryptoFrame {
            offset: offset.into_inner(),
            length: length.into_inner(),
            payload,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_offset_length_and_payload() {
        let raw = Bytes::from_static(&[0x00, 0x03, 0x01, 0x02, 0x03]);
        let (rest, frame) = decode(&raw, &raw).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.offset, 0);
        assert_eq!(frame.length, 3);
        assert_eq!(&frame.payload[..], &[1, 2, 3]);
    }
}
