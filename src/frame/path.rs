use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::take_fixed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathChallengeFrame {
    pub nonce: [u8; 8],
}

impl GetFrameType for PathChallengeFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::PathChallenge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResponseFrame {
    pub nonce: [u8; 8],
}

impl GetFrameType for PathResponseFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::PathResponse
    }
}

fn be_nonce(input: &[u8]) -> Result<(&[u8], [u8; 8]), Error> {
    let (input, bytes) = take_fixed(input, 8, "nonce")?;
    let mut nonce = [0u8; 8];
    nonce.copy_from_slice(bytes);
    Ok((input, nonce))
}

pub(super) fn decode_challenge(input: &[u8]) -> Result<(&[u8], PathChallengeFrame), Error> {
    let (input, nonce) = be_nonce(input)?;
    Ok((input, PathChallengeFrame { nonce }))
}

pub(super) fn decode_response(input: &[u8]) -> Result<(&[u8], PathResponseFrame), Error> {
    let (input, nonce) = be_nonce(input)?;
    Ok((input, PathResponseFrame { nonce }))
}
