use super::{FrameType, GetFrameType};

/// A keep-alive frame with no fields; its presence alone is the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingFrame;

impl GetFrameType for PingFrame {
    fn frame_type(&self) -> FrameType {
        FrameType::Ping
    }
}
