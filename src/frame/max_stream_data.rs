use super::{FrameType, GetFrameType};
use crate::{
    error::Error,
    primitives::IntoError,
    stream_id::{StreamId, StreamOwner, StreamType},
    varint::be_varint,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxStreamDataFrame {
    pub stream_id: StreamId,
    pub max_stream_data: u64,
}

impl GetFrameType for MaxStreamDataFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::MaxStreamData
    }
}

impl MaxStreamDataFrame {
    pub fn stream_owner(&self) -> StreamOwner {
        self.stream_id.owner()
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_id.stream_type()
    }
}

pub(super) fn decode(input: &[u8]) -> Result<(&[u8], MaxStreamDataFrame), Error> {
    let (input, stream_id) = be_varint(input).into_error()?;
    let (input, max_stream_data) = be_varint(input).into_error()?;
    Ok((
        input,
        MaxStreamDataFrame {
            stream_id: StreamId::from(stream_id),
            max_stream_data: max_stream_data.into_inner(),
        },
    ))
}
