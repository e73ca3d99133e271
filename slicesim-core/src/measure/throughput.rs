use crate::{
    defaults::{THROUGHPUT_AVERAGE_RATIO, THROUGHPUT_MIN_RATIO},
    measure::Bandwidth,
};
use serde::{Deserialize, Serialize};

/// Throughput profile of a slice: `average`, `max` and `min` rates.
///
/// Derived from a single base rate: `max` is the base itself,
/// `average` is 80% of it and `min` 60%.
///
/// ```
/// # use slicesim_core::measure::{Bandwidth, Throughput};
/// let throughput = Throughput::from_base(Bandwidth::from_mbps(1_000.0));
/// assert_eq!(throughput.average.as_mbps(), 800.0);
/// assert_eq!(throughput.max.as_mbps(), 1_000.0);
/// assert_eq!(throughput.min.as_mbps(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub average: Bandwidth,
    pub max: Bandwidth,
    pub min: Bandwidth,
}

impl Throughput {
    pub fn from_base(base: Bandwidth) -> Self {
        Self {
            average: base.scale(THROUGHPUT_AVERAGE_RATIO),
            max: base,
            min: base.scale(THROUGHPUT_MIN_RATIO),
        }
    }
}
