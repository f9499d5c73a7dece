//! Phase, retardance, diattenuation and amplitude decompositions built on
//! top of the Fresnel coefficients.
//!
//! Coefficients are real, so a phase is `atan2(0, c)`: `0` for a positive
//! coefficient and `PI` for a negative one.

pub mod reflection;
pub mod transmission;

use crate::polarization::{Polarization, PolarizationPair};

/// Phase of a real coefficient treated as a complex number with no imaginary part.
pub(crate) fn phase(coefficient: f64) -> f64 {
    0f64.atan2(coefficient)
}

/// Normalized difference between two intensities.
///
/// NaN when both intensities are zero.
pub(crate) fn diattenuation(intensity: PolarizationPair<f64>) -> f64 {
    (intensity.s - intensity.p).abs() / (intensity.s + intensity.p)
}

/// Phase difference between the s and p components.
pub(crate) fn retardance(phase: PolarizationPair<f64>) -> f64 {
    phase.s - phase.p
}

/// Selects from `pair` by raw polarization code, falling back to p.
pub(crate) fn select_or_p(pair: PolarizationPair<f64>, code: &str) -> f64 {
    match Polarization::from_code(code) {
        Some(Polarization::S) => pair.s,
        _ => pair.p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(0.5, 0.0)]
    #[case(-0.5, PI)]
    #[case(0.0, 0.0)]
    #[case(-0.0, PI)]
    fn phase_is_a_step(#[case] coefficient: f64, #[case] expected: f64) {
        assert_eq!(phase(coefficient), expected);
    }

    #[test]
    fn diattenuation_of_dark_pair_is_nan() {
        assert!(diattenuation(PolarizationPair::new(0., 0.)).is_nan());
    }
}
