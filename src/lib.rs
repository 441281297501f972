//! Draft-14 QUIC frame decoding core.
//!
//! [`parse_frames`] is the sole entry point: given the decrypted payload of
//! a single QUIC packet, it decodes the concatenated frame sequence into
//! three ordered lists — regular frames, ACK frames, and CRYPTO (TLS)
//! frames — or a single terminal [`error::Error`]. Packet header parsing,
//! decryption, congestion control, loss detection, stream reassembly, flow
//! control, the TLS handshake itself, and connection-ID routing are all
//! external collaborators this crate does not implement.

pub mod app_error;
pub mod conn_error;
pub mod error;
pub mod frame;
mod primitives;
pub mod stream_id;
pub mod varint;

pub use error::Error;
pub use frame::{parse_frames, Frame, GetFrameType, ParsedFrames};
