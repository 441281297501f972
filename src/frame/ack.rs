use super::{FrameType, GetFrameType};
use crate::{error::Error, primitives::IntoError, varint::be_varint};

/// Optional ECN mark counters attached to an ECN-variant ACK frame
/// (§4.3), in the wire order `ect0, ect1, ecn_ce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcnCounts {
    pub ect0: u64,
    pub ect1: u64,
    pub ecn_ce: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckFrame {
    pub largest_acked: u64,
    pub ack_delay: u64,
    /// Ascending, pairwise-disjoint inclusive packet-number ranges.
    pub ranges: Vec<(u64, u64)>,
    pub ecn_counts: Option<EcnCounts>,
}

impl GetFrameType for AckFrame {
    fn frame_type(&self) -> FrameType {
        if self.ecn_counts.is_some() {
            FrameType::AckEcn
        } else {
            FrameType::Ack
        }
    }
}

fn checked_sub(lhs: u64, rhs: u64) -> Result<u64, Error> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| Error::FrameFormat(format!("{lhs} - {rhs} underflows")))
}

pub(super) fn decode(input: &[u8], ecn: bool) -> Result<(&[u8], AckFrame), Error> {
    let (input, largest) = be_varint(input).into_error()?;
    let (input, delay) = be_varint(input).into_error()?;
    let (input, block_count) = be_varint(input).into_error()?;
    let block_count: u64 = block_count.into_inner();

    let (mut input, first_range) = be_varint(input).into_error()?;
    let mut smallest_of_range = checked_sub(largest.into_inner(), first_range.into_inner())?;
    let mut reconstructed = vec![(smallest_of_range, largest.into_inner())];

    for _ in 0..block_count {
        let (rest, gap) = be_varint(input).into_error()?;
        let (rest, ack_range) = be_varint(rest).into_error()?;
        input = rest;

        let next_largest = checked_sub(smallest_of_range, gap.into_inner())?;
        let next_largest = checked_sub(next_largest, 2)?;
        let next_smallest = checked_sub(next_largest, ack_range.into_inner())?;

        reconstructed.push((next_smallest, next_largest));
        smallest_of_range = next_smallest;
    }

    reconstructed.reverse();

    let (input, ecn_counts) = if ecn {
        let (input, ect0) = be_varint(input).into_error()?;
        let (input, ect1) = be_varint(input).into_error()?;
        let (input, ecn_ce) = be_varint(input).into_error()?;
        (
            input,
            Some(EcnCounts {
                ect0: ect0.into_inner(),
                ect1: ect1.into_inner(),
                ecn_ce: ecn_ce.into_inner(),
            }),
        )
    } else {
        (input, None)
    };

    Ok((
        input,
        AckFrame {
            largest_acked: largest.into_inner(),
            ack_delay: delay.into_inner(),
            ranges: reconstructed,
            ecn_counts,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_range_scenario() {
        let bytes = [10, 0, 1, 2, 1, 0];
        let (rest, frame) = decode(&bytes, false).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.largest_acked, 10);
        assert_eq!(frame.ack_delay, 0);
        assert_eq!(frame.ranges, vec![(5, 5), (8, 10)]);
        assert!(frame.ecn_counts.is_none());
    }

    #[test]
    fn zero_blocks_single_ascending_range() {
        // largest=100 needs the 2-byte varint form (0x40 | hi, lo).
        let bytes = [0x40, 100, 5, 0, 3];
        let (rest, frame) = decode(&bytes, false).unwrap();
        assert!(rest.is_empty());
        assert_eq!(frame.ranges, vec![(97, 100)]);
    }

    #[test]
    fn ecn_variant_reads_three_trailing_varints() {
        let bytes = [10, 0, 0, 0, 1, 2, 3];
        let (rest, frame) = decode(&bytes, true).unwrap();
        assert!(rest.is_empty());
        let ecn = frame.ecn_counts.unwrap();
        assert_eq!((ecn.ect0, ecn.ect1, ecn.ecn_ce), (1, 2, 3));
    }

    #[test]
    fn negative_bound_is_frame_format() {
        // ack_range larger than largest underflows the first subtraction.
        let bytes = [5, 0, 0, 10];
        assert!(matches!(decode(&bytes, false), Err(Error::FrameFormat(_))));
    }

    #[test]
    fn ranges_are_ascending_and_disjoint() {
        let bytes = [20, 0, 1, 2, 1, 0];
        let (_, frame) = decode(&bytes, false).unwrap();
        for pair in frame.ranges.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
