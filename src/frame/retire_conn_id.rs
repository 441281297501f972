use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetireConnIdFrame {
    pub sequence: u64,
}

impl GetFrameType for RetireConnIdFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::RetireConnId
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], RetireConnIdFrame), Error> {
    let (input, sequence) = be_varint(input).into_error()?;
    Ok((
        input,
        RetireConnIdFrame {
            sequence: sequence.into_inner(),
        },
    ))
}
