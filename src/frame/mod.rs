//! Frame dispatch (§4.1) and the top-level [`parse_frames`] entry point.
//!
//! Each frame kind has its own decode function in a sibling module; this
//! file only classifies the type byte and drives the loop that feeds a
//! shrinking [`Bytes`] suffix through them, the same shape as gm-quic's
//! `FrameReader` but collecting into three output lists instead of
//! producing one interleaved iterator.

mod ack;
mod conn_close;
mod crypto;
mod data_blocked;
mod max_data;
mod max_stream_data;
mod max_stream_id;
mod new_conn_id;
mod path;
mod ping;
mod retire_conn_id;
mod rst_stream;
mod stop_sending;
mod stream;
mod stream_data_blocked;
mod stream_id_blocked;

pub use ack::{AckFrame, EcnCounts};
pub use conn_close::{AppCloseFrame, ConnCloseFrame};
pub use crypto::CryptoFrame;
pub use data_blocked::DataBlockedFrame;
pub use max_data::MaxDataFrame;
pub use max_stream_data::MaxStreamDataFrame;
pub use max_stream_id::MaxStreamIdFrame;
pub use new_conn_id::NewConnIdFrame;
pub use path::{PathChallengeFrame, PathResponseFrame};
pub use ping::PingFrame;
pub use retire_conn_id::RetireConnIdFrame;
pub use rst_stream::RstStreamFrame;
pub use stop_sending::StopSendingFrame;
pub use stream::{StreamFrame, StreamKind};
pub use stream_data_blocked::StreamDataBlockedFrame;
pub use stream_id_blocked::StreamIdBlockedFrame;

use bytes::Bytes;
use enum_dispatch::enum_dispatch;

use crate::error::Error;

/// The classified type byte, before any frame-specific fields are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Padding,
    RstStream,
    ConnClose,
    AppClose,
    MaxData,
    MaxStreamData,
    MaxStreamId,
    Ping,
    DataBlocked,
    StreamDataBlocked,
    StreamIdBlocked,
    NewConnId,
    StopSending,
    RetireConnId,
    PathChallenge,
    PathResponse,
    Crypto,
    Ack,
    AckEcn,
    /// `0x10..=0x17`: `off`/`len`/`fin` are the three low flag bits.
    Stream { off: bool, len: bool, fin: bool },
}

impl TryFrom<u8> for FrameType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Error> {
        Ok(match byte {
            0x00 => FrameType::Padding,
            0x01 => FrameType::RstStream,
            0x02 => FrameType::ConnClose,
            0x03 => FrameType::AppClose,
            0x04 => FrameType::MaxData,
            0x05 => FrameType::MaxStreamData,
            0x06 => FrameType::MaxStreamId,
            0x07 => FrameType::Ping,
            0x08 => FrameType::DataBlocked,
            0x09 => FrameType::StreamDataBlocked,
            0x0a => FrameType::StreamIdBlocked,
            0x0b => FrameType::NewConnId,
            0x0c => FrameType::StopSending,
            0x0d => FrameType::RetireConnId,
            0x0e => FrameType::PathChallenge,
            0x0f => FrameType::PathResponse,
            0x18 => FrameType::Crypto,
            0x1a => FrameType::Ack,
            0x1b => FrameType::AckEcn,
            0x10..=0x17 => FrameType::Stream {
                off: byte & 0b100 != 0,
                len: byte & 0b010 != 0,
                fin: byte & 0b001 != 0,
            },
            other => return Err(Error::unknown_frame_type(other)),
        })
    }
}

/// Tags a frame variant with its classified [`FrameType`]; used for error
/// messages and debug output, mirroring gm-quic's `GetFrameType`.
#[enum_dispatch]
pub trait GetFrameType {
    fn frame_type(&self) -> FrameType;
}

/// A decoded regular (non-ACK, non-CRYPTO) frame.
#[enum_dispatch(GetFrameType)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Ping(PingFrame),
    RstStream(RstStreamFrame),
    ConnClose(ConnCloseFrame),
    AppClose(AppCloseFrame),
    MaxData(MaxDataFrame),
    MaxStreamData(MaxStreamDataFrame),
    MaxStreamId(MaxStreamIdFrame),
    DataBlocked(DataBlockedFrame),
    StreamDataBlocked(StreamDataBlockedFrame),
    StreamIdBlocked(StreamIdBlockedFrame),
    NewConnId(NewConnIdFrame),
    StopSending(StopSendingFrame),
    RetireConnId(RetireConnIdFrame),
    PathChallenge(PathChallengeFrame),
    PathResponse(PathResponseFrame),
    Stream(StreamFrame),
}

/// The three output lists `parse_frames` produces, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedFrames {
    pub frames: Vec<Frame>,
    pub acks: Vec<AckFrame>,
    pub tls: Vec<CryptoFrame>,
}

/// Decode every frame in a single QUIC packet's decrypted payload.
///
/// Consumes `payload` entirely on success; any trailing bytes, truncation,
/// or structural violation is reported as an [`Error`] with no partial
/// output.
pub fn parse_frames(payload: Bytes) -> Result<ParsedFrames, Error> {
    let payload_len = payload.len();
    match decode_payload(payload) {
        Ok(out) => {
            tracing::debug!(
                payload_len,
                frames = out.frames.len(),
                acks = out.acks.len(),
                tls = out.tls.len(),
                "parsed payload"
            );
            Ok(out)
        }
        Err(err) => {
            tracing::debug!(payload_len, %err, "rejected payload");
            Err(err)
        }
    }
}

fn decode_payload(payload: Bytes) -> Result<ParsedFrames, Error> {
    let mut out = ParsedFrames::default();
    let mut remaining = payload;

    while !remaining.is_empty() {
        let raw = remaining.clone();
        let (after_type, type_byte) = read_type_byte(&raw)?;
        let frame_type = FrameType::try_from(type_byte)?;
        tracing::trace!(?frame_type, "dispatched frame");

        if matches!(frame_type, FrameType::Padding) {
            remaining = raw.slice(1..);
            continue;
        }

        match frame_type {
            FrameType::Ping => {
                out.frames.push(Frame::Ping(PingFrame));
                remaining = raw.slice(1..);
            }
            FrameType::RstStream => {
                let (rest, frame) = rst_stream::decode(after_type)?;
                out.frames.push(Frame::RstStream(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::ConnClose => {
                let (rest, frame) = conn_close::decode_conn(after_type, &raw)?;
                out.frames.push(Frame::ConnClose(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::AppClose => {
                let (rest, frame) = conn_close::decode_app(after_type, &raw)?;
                out.frames.push(Frame::AppClose(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::MaxData => {
                let (rest, frame) = max_data::decode(after_type)?;
                out.frames.push(Frame::MaxData(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::MaxStreamData => {
                let (rest, frame) = max_stream_data::decode(after_type)?;
                out.frames.push(Frame::MaxStreamData(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::MaxStreamId => {
                let (rest, frame) = max_stream_id::decode(after_type)?;
                out.frames.push(Frame::MaxStreamId(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::DataBlocked => {
                let (rest, frame) = data_blocked::decode(after_type)?;
                out.frames.push(Frame::DataBlocked(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::StreamDataBlocked => {
                let (rest, frame) = stream_data_blocked::decode(after_type)?;
                out.frames.push(Frame::StreamDataBlocked(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::StreamIdBlocked => {
                let (rest, frame) = stream_id_blocked::decode(after_type)?;
                out.frames.push(Frame::StreamIdBlocked(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::NewConnId => {
                let (rest, frame) = new_conn_id::decode(after_type, &raw)?;
                out.frames.push(Frame::NewConnId(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::StopSending => {
                let (rest, frame) = stop_sending::decode(after_type)?;
                out.frames.push(Frame::StopSending(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::RetireConnId => {
                let (rest, frame) = retire_conn_id::decode(after_type)?;
                out.frames.push(Frame::RetireConnId(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::PathChallenge => {
                let (rest, frame) = path::decode_challenge(after_type)?;
                out.frames.push(Frame::PathChallenge(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::PathResponse => {
                let (rest, frame) = path::decode_response(after_type)?;
                out.frames.push(Frame::PathResponse(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::Crypto => {
                let (rest, frame) = crypto::decode(after_type, &raw)?;
                out.tls.push(frame);
                remaining = slice_to(&raw, rest);
            }
            FrameType::Ack => {
                let (rest, frame) = ack::decode(after_type, false)?;
                out.acks.push(frame);
                remaining = slice_to(&raw, rest);
            }
            FrameType::AckEcn => {
                let (rest, frame) = ack::decode(after_type, true)?;
                out.acks.push(frame);
                remaining = slice_to(&raw, rest);
            }
            FrameType::Stream { off, len, fin } => {
                let (rest, frame) = stream::decode(after_type, &raw, off, len, fin)?;
                out.frames.push(Frame::Stream(frame));
                remaining = slice_to(&raw, rest);
            }
            FrameType::Padding => unreachable!("handled above"),
        }
    }

    Ok(out)
}

/// Reads the one-byte frame type tag.
fn read_type_byte(input: &[u8]) -> Result<(&[u8], u8), Error> {
    let Some(&byte) = input.first() else {
        return Err(Error::truncated("frame type: no input remaining"));
    };
    Ok((&input[1..], byte))
}

/// Computes the absolute remaining suffix of `raw` given a nom-style
/// remainder slice produced by parsing some prefix of `raw`, the same
/// `raw.slice(raw.len() - rest.len()..)` idiom gm-quic uses to re-derive a
/// `Bytes` handle after borrowing into it via `&[u8]`.
pub(crate) fn slice_to(raw: &Bytes, rest: &[u8]) -> Bytes {
    let consumed = raw.len() - rest.len();
    raw.slice(consumed..)
}
