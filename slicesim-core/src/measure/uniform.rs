use rand_core::Rng;

/// `2^-53`, the spacing of the values returned by [`unit_interval`].
const SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Draw a value in `[0, 1)` from a single `next_u64()` call.
///
/// Only the top 53 bits are kept so every outcome is an exact `f64`
/// and `1.0` can never be produced.
///
/// The caller provides `rng` so that all synthesis randomness is
/// controlled from a single, seedable source. Any type implementing
/// [`Rng`] is accepted.
#[inline]
pub fn unit_interval<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * SCALE
}

/// Draw a value in `[low, low + width)`.
///
/// ```
/// # use slicesim_core::measure::uniform;
/// # use rand_chacha::ChaChaRng;
/// # use rand_core::SeedableRng as _;
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let value = uniform(5.0, 5.0, &mut rng);
/// assert!((5.0..10.0).contains(&value));
/// ```
pub fn uniform<R: Rng + ?Sized>(low: f64, width: f64, rng: &mut R) -> f64 {
    spread(low, width, unit_interval(rng))
}

/// Map `unit` (in `[0, 1)`) onto `[low, low + width)`.
///
/// The addition may round up to the excluded bound; such results are
/// pulled back to the closest value below it.
fn spread(low: f64, width: f64, unit: f64) -> f64 {
    let high = low + width;
    let value = low + unit * width;
    if value < high { value } else { high.next_down() }
}
