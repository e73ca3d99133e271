//! Radio access technologies and their per-node assignment.

use crate::{defaults::MM_WAVE_PROBABILITY, measure::unit_interval};
use rand_core::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The mobile generation a simulation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    #[serde(rename = "5G")]
    FiveG,
    #[serde(rename = "6G")]
    SixG,
}

/// Radio tier drawn for a node for the duration of one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Radio {
    #[serde(rename = "mmWave")]
    MmWave,
    #[serde(rename = "sub-6GHz")]
    Sub6GHz,
    #[serde(rename = "ultra-mmWave")]
    UltraMmWave,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown protocol `{0}', expecting `5G' or `6G'")]
pub struct ProtocolParseError(String);

impl Protocol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveG => "5G",
            Self::SixG => "6G",
        }
    }

    /// Draw the radio of one node.
    ///
    /// Under 5G every node flips its own fair coin between `mmWave` and
    /// `sub-6GHz`, consuming exactly one draw from `rng`. Under 6G every
    /// node is `ultra-mmWave`; one draw is still consumed so the stream
    /// position does not depend on the protocol.
    pub fn draw_radio<R: Rng + ?Sized>(self, rng: &mut R) -> Radio {
        let sample = unit_interval(rng);
        match self {
            Self::FiveG if sample < MM_WAVE_PROBABILITY => Radio::MmWave,
            Self::FiveG => Radio::Sub6GHz,
            Self::SixG => Radio::UltraMmWave,
        }
    }
}

impl Radio {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MmWave => "mmWave",
            Self::Sub6GHz => "sub-6GHz",
            Self::UltraMmWave => "ultra-mmWave",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ProtocolParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5G" | "5g" => Ok(Self::FiveG),
            "6G" | "6g" => Ok(Self::SixG),
            other => Err(ProtocolParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for Radio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaChaRng;
    use rand_core::SeedableRng as _;

    #[test]
    fn six_g_is_always_ultra_mm_wave() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(Protocol::SixG.draw_radio(&mut rng), Radio::UltraMmWave);
        }
    }

    #[test]
    fn five_g_is_a_fair_coin() {
        let mut rng = ChaChaRng::seed_from_u64(5);
        let trials = 20_000;
        let mm_wave = (0..trials)
            .map(|_| Protocol::FiveG.draw_radio(&mut rng))
            .inspect(|radio| assert_ne!(*radio, Radio::UltraMmWave))
            .filter(|radio| *radio == Radio::MmWave)
            .count();

        let ratio = mm_wave as f64 / trials as f64;
        assert!((ratio - 0.5).abs() < 0.02, "mmWave ratio {ratio}");
    }

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&Protocol::FiveG).unwrap(), r#""5G""#);
        assert_eq!(serde_json::to_string(&Protocol::SixG).unwrap(), r#""6G""#);
        assert_eq!(serde_json::to_string(&Radio::MmWave).unwrap(), r#""mmWave""#);
        assert_eq!(serde_json::to_string(&Radio::Sub6GHz).unwrap(), r#""sub-6GHz""#);
        assert_eq!(
            serde_json::to_string(&Radio::UltraMmWave).unwrap(),
            r#""ultra-mmWave""#
        );
    }

    #[test]
    fn unknown_protocol_is_rejected() {
        assert!(serde_json::from_str::<Protocol>(r#""4G""#).is_err());
        assert_eq!(
            "LTE".parse::<Protocol>(),
            Err(ProtocolParseError("LTE".to_owned()))
        );
    }

    #[test]
    fn parse() {
        assert_eq!("5G".parse::<Protocol>(), Ok(Protocol::FiveG));
        assert_eq!("6g".parse::<Protocol>(), Ok(Protocol::SixG));
    }
}
