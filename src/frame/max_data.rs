use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxDataFrame {
    pub max_data: u64,
}

impl GetFrameType for MaxDataFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::MaxData
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], MaxDataFrame), Error> {
    let (input, max_data) = be_varint(input).into_error()?;
    Ok((
        input,
        MaxDataFrame {
            max_data: max_data.into_inner(),
        },
    ))
}
