use bitflags::bitflags;
use bytes::Bytes;

use super::{FrameType, GetFrameType};
use crate::{
    error::Error,
    primitives::IntoError,
    stream_id::{StreamId, StreamOwner, StreamType},
    varint::be_varint,
};

bitflags! {
    /// The three low flag bits of a `0x10..=0x17` STREAM type byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u8 {
        const OFF = 0b100;
        const LEN = 0b010;
        const FIN = 0b001;
    }
}

/// Which of the three stream-frame variants a decoded frame is, per the
/// `FIN`/`offset`/`LEN` combination observed at decode time (§3, §9 open
/// question: the three-way split is preserved rather than collapsed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Open,
    Data,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamFrame {
    pub kind: StreamKind,
    pub stream_id: StreamId,
    pub offset: u64,
    pub data: Bytes,
}

impl GetFrameType for StreamFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::Stream {
            off: self.offset != 0,
            len: true,
            fin: matches!(self.kind, StreamKind::Close),
        }
    }
}

impl StreamFrame {
    pub fn stream_owner(&self) -> StreamOwner {
        self.stream_id.owner()
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_id.stream_type()
    }
}

/// Decodes a STREAM frame. When `len` is unset there is no length prefix to
/// bound the data: per §4.1 it consumes every byte remaining in the payload,
/// so the returned remainder is always empty and this is necessarily the
/// last frame `decode_payload` will see (there is nothing left to dispatch
/// another type byte from).
pub(super) fn decode<'a>(
    input: &'a [u8],
    raw: &Bytes,
    off: bool,
    len: bool,
    fin: bool,
) -> Result<(&'a [u8], StreamFrame), Error> {
    let flags = StreamFlags::empty()
        | if off { StreamFlags::OFF } else { StreamFlags::empty() }
        | if len { StreamFlags::LEN } else { StreamFlags::empty() }
        | if fin { StreamFlags::FIN } else { StreamFlags::empty() };

    let (input, stream_id) = be_varint(input).into_error()?;
    let stream_id = StreamId::from(stream_id);

    let (input, offset) = if flags.contains(StreamFlags::OFF) {
        let (input, offset) = be_varint(input).into_error()?;
        (input, offset.into_inner())
    } else {
        (input, 0)
    };

    let kind = if fin {
        StreamKind::Close
    } else if offset == 0 {
        StreamKind::Open
    } else {
        StreamKind::Data
    };

    if flags.contains(StreamFlags::LEN) {
        let (input, length) = be_varint(input).into_error()?;
        let length: usize = length.into();
        if input.len() < length {
            return Err(Error::truncated(format!(
                "stream data: need {length} bytes, have {}",
                input.len()
            )));
        }
        let start = raw.len() - input.len();
        let data = raw.slice(start..start + length);
        let rest = &input[length..];
        Ok((
            rest,
            StreamFrame {
                kind,
                stream_id,
                offset,
                data,
            },
        ))
    } else {
        let start = raw.len() - input.len();
        let data = raw.slice(start..);
        Ok((
            &input[input.len()..],
            StreamFrame {
                kind,
                stream_id,
                offset,
                data,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fin_off0_len0_consumes_remainder_as_close() {
        let raw = Bytes::from_static(&[0x04, b'h', b'i']);
        let (rest, frame) = decode(&raw, &raw, false, false, true).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.kind, StreamKind::Close);
        assert_eq!(frame.offset, 0);
        assert_eq!(&frame.data[..], b"hi");
    }

    #[test]
    fn off_and_len_present_decodes_data_variant() {
        let raw = Bytes::from_static(&[0x04, 0x05, 0x02, b'h', b'i']);
        let (rest, frame) = decode(&raw, &raw, true, true, false).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.kind, StreamKind::Data);
        assert_eq!(frame.offset, 5);
        assert_eq!(&frame.data[..], b"hi");
    }

    #[test]
    fn no_off_first_byte_is_open() {
        let raw = Bytes::from_static(&[0x04, 0x02, b'h', b'i']);
        let (_, frame) = decode(&raw, &raw, false, true, false).unwrap();
        assert_eq!(frame.kind, StreamKind::Open);
        assert_eq!(frame.offset, 0);
    }

    #[test]
    fn len0_consumes_trailing_bytes_as_data() {
        let raw = Bytes::from_static(&[0x04, b'h', b'i', 0x07]);
        let (rest, frame) = decode(&raw, &raw, false, false, false).unwrap();
        assert!(rest.is_empty());
        assert_eq!(&frame.data[..], &[b'h', b'i', 0x07]);
    }
}
