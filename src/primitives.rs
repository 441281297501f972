//! Shared field decoders for the protocol's fixed primitive shapes (§4.2):
//! 16-bit codes and fixed-length byte spans. Length-prefixed message bodies
//! (crypto payload, stream data, close reasons) are decoded inline at each
//! call site because each needs to slice the frame's original `Bytes`
//! buffer at an absolute offset, the same way gm-quic's `complete_frame`
//! computes `start = raw.len() - input.len()` for CRYPTO/STREAM data.

use crate::error::Error;

/// Reads exactly `n` bytes. Truncated input — whether zero bytes or some
/// but not enough remain — is always `Badarg`, the same kind `be_varint`
/// reports for a torn varint (§4.4: both are malformed encoding, not a
/// structural violation of an otherwise well-formed payload).
pub(crate) fn take_fixed<'a>(
    input: &'a [u8],
    n: usize,
    field: &str,
) -> Result<(&'a [u8], &'a [u8]), Error> {
    if input.len() >= n {
        return Ok((&input[n..], &input[..n]));
    }
    Err(Error::truncated(format!(
        "{field}: need {n} bytes, have {}",
        input.len()
    )))
}

pub(crate) fn be_u16(input: &[u8], field: &str) -> Result<(&[u8], u16), Error> {
    let (rest, bytes) = take_fixed(input, 2, field)?;
    Ok((rest, u16::from_be_bytes([bytes[0], bytes[1]])))
}

/// Extension so call sites can unwrap `nom::Err<Error>` into a plain
/// `Error` without matching on `Incomplete`/`Failure`, which `be_varint`
/// never produces.
pub(crate) trait IntoError<T> {
    fn into_error(self) -> Result<T, Error>;
}

impl<T> IntoError<T> for Result<T, nom::Err<Error>> {
    fn into_error(self) -> Result<T, Error> {
        self.map_err(|e| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => unreachable!("be_varint never returns Incomplete"),
        })
    }
}
