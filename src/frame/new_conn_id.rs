use bytes::Bytes;

use super::{FrameType, GetFrameType};
use crate::{
    error::Error,
    primitives::{take_fixed, IntoError},
    varint::be_varint,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConnIdFrame {
    pub sequence: u64,
    pub conn_id: Bytes,
    pub stateless_reset_token: [u8; 16],
}

impl GetFrameType for NewConnIdFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::NewConnId
    }
}

/// `new_conn_id`'s connection-ID length is a 5-bit field with 3 leading
/// reserved bits, read from the same octet the sequence varint follows
/// rather than the type byte itself (§4.1).
pub(super) fn decode<'a>(
    input: &'a [u8],
    raw: &Bytes,
) -> Result<(&'a [u8], NewConnIdFrame), Error> {
    let (input, len_byte) = take_fixed(input, 1, "conn_id length")?;
    let len = (len_byte[0] & 0b0001_1111) as usize;
    let (input, sequence) = be_varint(input).into_error()?;
    let (input, conn_id_bytes) = take_fixed(input, len, "conn_id")?;
    let start = raw.len() - input.len() - conn_id_bytes.len();
    let conn_id = raw.slice(start..start + len);
    let (input, token_bytes) = take_fixed(input, 16, "stateless_reset_token")?;
    let mut stateless_reset_token = [0u8; 16];
    stateless_reset_token.copy_from_slice(token_bytes);
    Ok((
        input,
        NewConnIdFrame {
            sequence: sequence.into_inner(),
            conn_id,
            stateless_reset_token,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_length_sequence_id_and_token() {
        let mut bytes = vec![0x04, 0x07];
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        bytes.extend_from_slice(&[0xff; 16]);
        let raw = Bytes::from(bytes);
        let (rest, frame) = decode(&raw, &raw).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.sequence, 7);
        assert_eq!(&frame.conn_id[..], &[1, 2, 3, 4]);
        assert_eq!(frame.stateless_reset_token, [0xff; 16]);
    }

    #[test]
    fn zero_length_conn_id_is_empty() {
        let mut bytes = vec![0x00, 0x00];
        bytes.extend_from_slice(&[0u8; 16]);
        let raw = Bytes::from(bytes);
        let (rest, frame) = decode(&raw, &raw).unwrap();
        assert!(rest.is_empty());
        assert!(frame.conn_id.is_empty());
    }
}
