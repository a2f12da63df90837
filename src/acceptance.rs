//! Metropolis acceptance criterion.
//!
//! # Reference
//!
//! Metropolis et al. (1953), "Equation of State Calculations by Fast
//! Computing Machines"

use rand::Rng;

/// Probability of moving to a candidate whose energy exceeds the current
/// one by `ds` at temperature `t`: `exp(-ds / t)`.
///
/// `ds == 0` yields exactly 1, so zero-cost moves are always taken; as `t`
/// falls toward 0 the probability vanishes for any positive `ds`.
pub fn transition_probability(ds: f64, temperature: f64) -> f64 {
    (-ds / temperature).exp()
}

/// Decides whether the search moves to a candidate whose energy differs
/// from the current one by `ds` (candidate minus current).
///
/// Improving moves (`ds < 0`) are accepted unconditionally. Non-improving
/// moves are accepted when a uniform draw from `[0, 1)` falls below
/// [`transition_probability`]. The temperature must be strictly positive
/// for that draw; at zero or below, every non-improving move is rejected
/// so the division never sees a zero denominator.
pub fn accepts<R: Rng>(ds: i64, temperature: f64, rng: &mut R) -> bool {
    if ds < 0 {
        return true;
    }
    if temperature > 0.0 {
        let probability = transition_probability(ds as f64, temperature);
        rng.random_range(0.0..1.0) < probability
    } else {
        false
    }
}
