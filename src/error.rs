use thiserror::Error;

/// The three terminal error kinds a decoded payload can fail with.
///
/// All errors are final: a payload either decodes completely into its three
/// frame lists, or parsing stops at the first error and nothing is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input bytes could not be interpreted as framed QUIC data at all:
    /// truncation, an unknown frame type octet, or a length-prefixed field
    /// whose declared length overruns what remains.
    #[error("badarg: {0}")]
    Badarg(String),
    /// The input consists of recognisable primitives but violates a
    /// structural framing rule, such as an unbounded STREAM frame not being
    /// the last frame in the payload.
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    /// ACK range reconstruction produced a negative packet number.
    #[error("invalid frame format: {0}")]
    FrameFormat(String),
}

impl Error {
    pub(crate) fn unknown_frame_type(byte: u8) -> Self {
        Error::Badarg(format!("unknown frame type byte 0x{byte:02x}"))
    }

    pub(crate) fn truncated(what: impl std::fmt::Display) -> Self {
        Error::Badarg(format!("truncated {what}"))
    }
}

impl<'a> nom::error::ParseError<&'a [u8]> for Error {
    fn from_error_kind(input: &'a [u8], kind: nom::error::ErrorKind) -> Self {
        Error::Badarg(format!(
            "{kind:?} with {} bytes remaining",
            input.len()
        ))
    }

    fn append(_input: &'a [u8], _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}
