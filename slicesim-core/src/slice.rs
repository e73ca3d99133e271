//! Network slices and the partitioning of demand across them.

use crate::{
    measure::{Bandwidth, Throughput},
    radio::Protocol,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three slices every simulation produces, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliceKind {
    /// enhanced mobile broadband
    #[serde(rename = "eMBB")]
    Embb,
    /// ultra-reliable low-latency communication
    #[serde(rename = "URLLC")]
    Urllc,
    /// massive machine-type communication
    #[serde(rename = "mMTC")]
    Mmtc,
}

/// User and IoT demand apportioned to one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub name: SliceKind,
    pub users: u64,
    pub iot: u64,
}

impl SliceKind {
    pub const ALL: [Self; 3] = [Self::Embb, Self::Urllc, Self::Mmtc];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Embb => "eMBB",
            Self::Urllc => "URLLC",
            Self::Mmtc => "mMTC",
        }
    }

    /// Peak rate (Mbps) of this slice under `protocol`.
    pub const fn base_throughput(self, protocol: Protocol) -> Bandwidth {
        let mbps = match (protocol, self) {
            (Protocol::FiveG, Self::Embb) => 1_000.0,
            (Protocol::FiveG, Self::Urllc) => 300.0,
            (Protocol::FiveG, Self::Mmtc) => 100.0,
            (Protocol::SixG, Self::Embb) => 5_000.0,
            (Protocol::SixG, Self::Urllc) => 1_000.0,
            (Protocol::SixG, Self::Mmtc) => 500.0,
        };
        Bandwidth::from_mbps(mbps)
    }

    pub fn throughput(self, protocol: Protocol) -> Throughput {
        Throughput::from_base(self.base_throughput(protocol))
    }
}

impl fmt::Display for SliceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// `floor(count * ratio)`, computed in double precision.
#[inline]
fn share(count: u64, ratio: f64) -> u64 {
    (count as f64 * ratio).floor() as u64
}

/// Split `users` and `iot` devices across the three slices.
///
/// | slice | users | iot |
/// |-------|-------|-----|
/// | eMBB  | `⌊U·0.5⌋` | `⌊I·0.2⌋` |
/// | URLLC | `⌊U·0.2⌋` | `⌊I·0.3⌋` |
/// | mMTC  | `U − ⌊U·0.7⌋` | `I − ⌊I·0.5⌋` |
///
/// The formulas are applied literally: the slice counts are not
/// guaranteed to add back up to `users` or `iot`.
///
/// ```
/// # use slicesim_core::slice::{partition, SliceKind};
/// let [embb, urllc, mmtc] = partition(100, 50);
/// assert_eq!((embb.users, embb.iot), (50, 10));
/// assert_eq!((urllc.users, urllc.iot), (20, 15));
/// assert_eq!((mmtc.users, mmtc.iot), (30, 25));
/// ```
pub fn partition(users: u64, iot: u64) -> [Slice; 3] {
    [
        Slice {
            name: SliceKind::Embb,
            users: share(users, 0.5),
            iot: share(iot, 0.2),
        },
        Slice {
            name: SliceKind::Urllc,
            users: share(users, 0.2),
            iot: share(iot, 0.3),
        },
        Slice {
            name: SliceKind::Mmtc,
            users: users - share(users, 0.7),
            iot: iot - share(iot, 0.5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(slices: &[Slice; 3]) -> (u64, u64) {
        slices
            .iter()
            .fold((0, 0), |(u, i), s| (u + s.users, i + s.iot))
    }

    #[test]
    fn zero_demand_gives_empty_slices() {
        for slice in partition(0, 0) {
            assert_eq!((slice.users, slice.iot), (0, 0));
        }
    }

    #[test]
    fn slice_order_is_fixed() {
        let names: Vec<_> = partition(10, 10).iter().map(|s| s.name).collect();
        assert_eq!(names, SliceKind::ALL);
    }

    #[test]
    fn single_user_lands_in_mmtc() {
        let [embb, urllc, mmtc] = partition(1, 1);
        assert_eq!((embb.users, embb.iot), (0, 0));
        assert_eq!((urllc.users, urllc.iot), (0, 0));
        assert_eq!((mmtc.users, mmtc.iot), (1, 1));
    }

    #[test]
    fn totals_may_not_be_conserved() {
        // users: 3 + 1 + (7 - 4) = 7
        // iot:   0 + 0 + (3 - 1) = 2 != 3
        let slices = partition(7, 3);
        assert_eq!(totals(&slices), (7, 2));
    }

    #[test]
    fn round_values_are_conserved() {
        assert_eq!(totals(&partition(1_000, 1_000)), (1_000, 1_000));
    }

    #[test]
    fn throughput_table() {
        let expected = [
            (Protocol::FiveG, SliceKind::Embb, 1_000.0),
            (Protocol::FiveG, SliceKind::Urllc, 300.0),
            (Protocol::FiveG, SliceKind::Mmtc, 100.0),
            (Protocol::SixG, SliceKind::Embb, 5_000.0),
            (Protocol::SixG, SliceKind::Urllc, 1_000.0),
            (Protocol::SixG, SliceKind::Mmtc, 500.0),
        ];

        for (protocol, slice, base) in expected {
            let throughput = slice.throughput(protocol);
            assert_eq!(throughput.max.as_mbps(), base);
            assert_eq!(throughput.average.as_mbps(), base * 0.8);
            assert_eq!(throughput.min.as_mbps(), base * 0.6);
        }
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_string(&partition(100, 50)).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"eMBB","users":50,"iot":10},{"name":"URLLC","users":20,"iot":15},{"name":"mMTC","users":30,"iot":25}]"#
        );
    }
}
