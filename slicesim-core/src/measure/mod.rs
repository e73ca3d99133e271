mod bandwidth;
mod latency;
mod throughput;
mod uniform;

pub use self::{
    bandwidth::Bandwidth,
    latency::Latency,
    throughput::Throughput,
    uniform::{uniform, unit_interval},
};

/// A measure as found on the wire: a bare number in the measure's base
/// unit, or a string with units to be parsed.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawMeasure {
    Number(f64),
    Text(String),
}
