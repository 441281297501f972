//! A 62-bit stream identifier and the two low bits it encodes.
//!
//! See the **Stream owner / stream type** glossary entry: the origin and
//! directionality bits are derived from `StreamId` on every access and are
//! never stored independently, to avoid the two drifting apart.

use derive_more::{Deref, From};

use crate::varint::VarInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From)]
pub struct StreamId(VarInt);

/// Bit 0 of a stream id: which endpoint initiated the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOwner {
    Client,
    Server,
}

/// Bit 1 of a stream id: whether the stream carries data in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
    Bidirectional,
    Unidirectional,
}

impl StreamId {
    pub fn owner(&self) -> StreamOwner {
        if self.0.into_inner() & 0b01 == 0 {
            StreamOwner::Client
        } else {
            StreamOwner::Server
        }
    }

    pub fn stream_type(&self) -> StreamType {
        if self.0.into_inner() & 0b10 == 0 {
            StreamType::Bidirectional
        } else {
            StreamType::Unidirectional
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_bits_decompose_into_owner_and_type() {
        let id = StreamId(VarInt::from_u32(0));
        assert_eq!(id.owner(), StreamOwner::Client);
        assert_eq!(id.stream_type(), StreamType::Bidirectional);

        let id = StreamId(VarInt::from_u32(1));
        assert_eq!(id.owner(), StreamOwner::Server);
        assert_eq!(id.stream_type(), StreamType::Bidirectional);

        let id = StreamId(VarInt::from_u32(2));
        assert_eq!(id.owner(), StreamOwner::Client);
        assert_eq!(id.stream_type(), StreamType::Unidirectional);

        let id = StreamId(VarInt::from_u32(3));
        assert_eq!(id.owner(), StreamOwner::Server);
        assert_eq!(id.stream_type(), StreamType::Unidirectional);
    }
}
