use anyhow::{bail, ensure};
use logos::{Lexer, Logos};
use super::RawMeasure;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{fmt, str::FromStr};

/// The [`Bandwidth`] of a link, in megabits per second.
///
/// On the wire a [`Bandwidth`] is written as a bare number of Mbps and
/// read from either that or a string with units. Units are decimal:
/// `1gbps` is `1000mbps`.
///
/// # Example
///
/// ```
/// # use slicesim_core::measure::Bandwidth;
/// let bw: Bandwidth = "1.2gbps".parse().unwrap();
/// assert_eq!(bw.as_mbps(), 1_200.0);
/// assert_eq!(bw.to_string(), "1200.00mbps");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Bandwidth(f64);

impl Bandwidth {
    #[inline(always)]
    pub const fn from_mbps(mbps: f64) -> Self {
        Self(mbps)
    }

    #[inline(always)]
    pub const fn as_mbps(self) -> f64 {
        self.0
    }

    /// Scale this bandwidth by `ratio`.
    #[inline]
    pub fn scale(self, ratio: f64) -> Self {
        Self(self.0 * ratio)
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}mbps", self.0)
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum BandwidthToken {
    #[token("bps")]
    Bps,
    #[token("kbps")]
    Kbps,
    #[token("mbps")]
    Mbps,
    #[token("gbps")]
    Gbps,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Value,
}

impl FromStr for Bandwidth {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, BandwidthToken>::new(s);

        let Some(Ok(BandwidthToken::Value)) = lex.next() else {
            bail!("Expecting to parse a number")
        };
        let number: f64 = lex.slice().parse()?;
        let Some(Ok(token)) = lex.next() else {
            bail!("Expecting to parse a unit")
        };
        let mbps = match token {
            BandwidthToken::Bps => number / 1_000_000.0,
            BandwidthToken::Kbps => number / 1_000.0,
            BandwidthToken::Mbps => number,
            BandwidthToken::Gbps => number * 1_000.0,
            BandwidthToken::Value => bail!("Expecting to parse a unit (bps, kbps, ...)"),
        };

        ensure!(
            lex.next().is_none(),
            "Not expecting any other tokens to parse a bandwidth"
        );

        Ok(Self(mbps))
    }
}

impl<'de> Deserialize<'de> for Bandwidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawMeasure::deserialize(deserializer)? {
            RawMeasure::Number(mbps) => Ok(Self(mbps)),
            RawMeasure::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}
