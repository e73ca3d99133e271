use anyhow::{anyhow, bail, ensure};
use logos::{Lexer, Logos};
use super::RawMeasure;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::{fmt, str::FromStr};

/// The latency is a measure of how much a signal takes to
/// travel through a node, in milliseconds.
///
/// On the wire a [`Latency`] is written as a bare number of milliseconds
/// and read from either that or a string with units. Its textual form
/// always prints milliseconds with two decimals:
///
/// ```
/// # use slicesim_core::measure::Latency;
/// assert_eq!(Latency::from_millis(7.4213).to_string(), "7.42ms");
/// ```
///
/// and parses any sum of `us`, `ms` and `s` terms:
///
/// ```
/// # use slicesim_core::measure::Latency;
/// let latency: Latency = "1s 250ms".parse().unwrap();
/// assert_eq!(latency.as_millis(), 1_250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Latency(f64);

impl Latency {
    /// The `0` latency. I.e. no latency.
    pub const ZERO: Self = Self(0.0);

    #[inline(always)]
    pub const fn from_millis(millis: f64) -> Self {
        Self(millis)
    }

    #[inline(always)]
    pub const fn as_millis(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}ms", self.0)
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum LatencyToken {
    #[regex("us|µs|μs")]
    MicroSeconds,
    #[token("ms")]
    MilliSeconds,
    #[token("s")]
    Seconds,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Value,
}

impl FromStr for Latency {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, LatencyToken>::new(s);
        let mut millis = 0.0;
        let mut terms = 0;

        while let Some(next) = lex.next() {
            let token = next.map_err(|()| anyhow!("Failed to parse latency: {s}"))?;
            ensure!(
                token == LatencyToken::Value,
                "Expecting latency to start with a number. Cannot parse {s}"
            );
            let number: f64 = lex.slice().parse()?;

            let Some(Ok(unit)) = lex.next() else {
                bail!("Expecting a unit (us, ms, s), failed to parse: {s}")
            };
            millis += match unit {
                LatencyToken::MicroSeconds => number / 1_000.0,
                LatencyToken::MilliSeconds => number,
                LatencyToken::Seconds => number * 1_000.0,
                LatencyToken::Value => bail!("Failed to parse `{s}', expecting a unit."),
            };
            terms += 1;
        }

        ensure!(terms > 0, "Expecting to parse a latency, got an empty string");

        Ok(Self(millis))
    }
}

impl<'de> Deserialize<'de> for Latency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawMeasure::deserialize(deserializer)? {
            RawMeasure::Number(millis) => Ok(Self(millis)),
            RawMeasure::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}
