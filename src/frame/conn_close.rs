use bytes::Bytes;

use super::{FrameType, GetFrameType};
use crate::{
    app_error::AppError,
    conn_error::ConnError,
    error::Error,
    primitives::{be_u16, IntoError},
    varint::be_varint,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnCloseFrame {
    pub error_code: ConnError,
    pub error_message: Bytes,
}

impl GetFrameType for ConnCloseFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::ConnClose
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCloseFrame {
    pub app_error_code: AppError,
    pub error_message: Bytes,
}

impl GetFrameType for AppCloseFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::AppClose
    }
}

/// Reads the length-prefixed message body shared by CONNECTION_CLOSE and
/// APPLICATION_CLOSE, slicing `raw` (the full remaining buffer at this
/// frame's start) at an absolute offset so the returned `Bytes` is
/// zero-copy.
fn be_message<'a>(input: &'a [u8], raw: &Bytes) -> Result<(&'a [u8], Bytes), Error> {
    let (input, len) = be_varint(input).into_error()?;
    let len: usize = len.into();
    if input.len() < len {
        return Err(Error::truncated(format!(
            "message body: need {len} bytes, have {}",
            input.len()
        )));
    }
    let start = raw.len() - input.len();
    let message = raw.slice(start..start + len);
    Ok((&input[len..], message))
}

pub(super) fn decode_conn<'a>(
    input: &'a [u8],
    raw: &Bytes,
) -> Result<(&'a [u8], ConnCloseFrame), Error> {
    let (input, code) = be_u16(input, "error_code")?;
    let error_code = ConnError::try_from(code)?;
    let (input, error_message) = be_message(input, raw)?;
    Ok((
        input,
        ConnCloseFrame {
            error_code,
            error_message,
        },
    ))
}

pub(super) fn decode_app<'a>(
    input: &'a [u8],
    raw: &Bytes,
) -> Result<(&'a [u8], AppCloseFrame), Error> {
    let (input, code) = be_u16(input, "app_error_code")?;
    let (input, error_message) = be_message(input, raw)?;
    Ok((
        input,
        AppCloseFrame {
            app_error_code: AppError::from(code),
            error_message,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conn_close_slices_message_body_zero_copy() {
        let bytes = Bytes::from_static(&[0x00, 0x00, 0x00, 0x03, b'o', b'o', b'f']);
        let (rest, frame) = decode_conn(&bytes, &bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.error_code, ConnError::Ok);
        assert_eq!(&frame.error_message[..], b"oof");
    }

    #[test]
    fn app_close_distinguishes_stopping() {
        let bytes = Bytes::from_static(&[0x00, 0x00, 0x00]);
        let (rest, frame) = decode_app(&bytes, &bytes).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.app_error_code, AppError::Stopping);
        assert!(frame.error_message.is_empty());
    }

    #[test]
    fn message_longer_than_remaining_is_badarg() {
        let bytes = Bytes::from_static(&[0x00, 0x00, 0x05, b'h', b'i']);
        assert!(matches!(decode_conn(&bytes, &bytes), Err(Error::Badarg(_))));
    }
}
