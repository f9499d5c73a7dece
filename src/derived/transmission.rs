//! Quantities derived from transmitted light.
//!
//! The amplitude functions use the transmission amplitude coefficients and
//! choose their own value past the critical angle: `0.0` for the magnitude
//! and NaN for the phase and real part. Retardance and diattenuation are
//! computed from the transmitted power instead.

use super::{
    diattenuation as normalized_difference, phase, retardance as phase_difference, select_or_p,
};
use crate::{
    coefficient::{transmission_amplitude, transmittance_pair},
    interface::Interface,
    polarization::PolarizationPair,
};
use uom::si::f64::Angle;

/// Magnitude of the transmission amplitude, zero past the critical angle.
pub fn amplitude_abs(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    transmission_amplitude(interface, angle)
        .map(|t| t.map(f64::abs))
        .unwrap_or(PolarizationPair::new(0., 0.))
}

/// Phase of the transmission amplitude, NaN past the critical angle.
pub fn amplitude_phase(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    transmission_amplitude(interface, angle)
        .map(|t| t.map(phase))
        .unwrap_or(PolarizationPair::new(f64::NAN, f64::NAN))
}

/// The transmission amplitude itself, NaN past the critical angle.
pub fn amplitude_real(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    transmission_amplitude(interface, angle).unwrap_or(PolarizationPair::new(f64::NAN, f64::NAN))
}

/// Looks up [`amplitude_abs`] by a raw polarization code; anything but `s` selects p.
pub fn amplitude_abs_for_code(interface: &Interface, angle: Angle, code: &str) -> f64 {
    select_or_p(amplitude_abs(interface, angle), code)
}

/// Looks up [`amplitude_phase`] by a raw polarization code; anything but `s` selects p.
pub fn amplitude_phase_for_code(interface: &Interface, angle: Angle, code: &str) -> f64 {
    select_or_p(amplitude_phase(interface, angle), code)
}

/// Looks up [`amplitude_real`] by a raw polarization code; anything but `s` selects p.
pub fn amplitude_real_for_code(interface: &Interface, angle: Angle, code: &str) -> f64 {
    select_or_p(amplitude_real(interface, angle), code)
}

/// Phase difference of the transmitted power coefficients.
///
/// The power is never negative, so this is `0.0` at every angle.
pub fn retardance(interface: &Interface, angle: Angle) -> f64 {
    phase_difference(transmittance_pair(interface, angle).map(phase))
}

/// `|Ts - Tp| / (Ts + Tp)` with `Tx` the squared transmitted power.
///
/// NaN past the critical angle where both powers are zero.
pub fn diattenuation(interface: &Interface, angle: Angle) -> f64 {
    normalized_difference(transmittance_pair(interface, angle).map(|t| t * t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use uom::si::angle::degree;

    fn a(angle: f64) -> Angle {
        Angle::new::<degree>(angle)
    }

    fn glass_air() -> Interface {
        Interface::new(1.5, 1.0).unwrap()
    }

    #[test]
    fn sentinels_past_critical() {
        let interface = glass_air();
        let angle = a(50.0);

        assert_eq!(amplitude_abs(&interface, angle), PolarizationPair::new(0., 0.));
        assert!(amplitude_phase(&interface, angle).s.is_nan());
        assert!(amplitude_phase(&interface, angle).p.is_nan());
        assert!(amplitude_real(&interface, angle).s.is_nan());
        assert!(amplitude_real(&interface, angle).p.is_nan());
        assert_eq!(retardance(&interface, angle), 0.0);
        assert!(diattenuation(&interface, angle).is_nan());
    }

    #[test]
    fn amplitude_below_critical() {
        // At normal incidence ts = tp = 2 n1 / (n1 + n2).
        let t = amplitude_real(&glass_air(), a(0.0));
        assert_relative_eq!(t.s, 1.2, epsilon = 1e-12);
        assert_relative_eq!(t.p, 1.2, epsilon = 1e-12);
        assert_eq!(amplitude_abs(&glass_air(), a(0.0)), t);
        assert_eq!(amplitude_phase(&glass_air(), a(0.0)), PolarizationPair::new(0., 0.));
    }

    #[test]
    fn diattenuation_uses_squared_power() {
        let interface = Interface::new(1.0, 1.5).unwrap();
        let angle = a(60.0);
        let t = transmittance_pair(&interface, angle);
        let (ts, tp) = (t.s * t.s, t.p * t.p);
        assert_relative_eq!(
            diattenuation(&interface, angle),
            (ts - tp).abs() / (ts + tp),
            epsilon = 1e-12
        );
        assert_relative_eq!(diattenuation(&interface, a(0.0)), 0.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case("s", true)]
    #[case("p", false)]
    #[case("q", false)]
    fn code_lookup_falls_back_to_p(#[case] code: &str, #[case] selects_s: bool) {
        let interface = Interface::new(1.0, 1.5).unwrap();
        let angle = a(30.0);
        let t = amplitude_real(&interface, angle);
        let expected = if selects_s { t.s } else { t.p };
        assert_eq!(amplitude_real_for_code(&interface, angle, code), expected);
        assert_eq!(amplitude_abs_for_code(&interface, angle, code), expected.abs());
        assert_eq!(amplitude_phase_for_code(&interface, angle, code), 0.0);
    }

    #[rstest]
    #[case("s")]
    #[case("x")]
    fn code_lookup_keeps_guard(#[case] code: &str) {
        let interface = glass_air();
        assert_eq!(amplitude_abs_for_code(&interface, a(70.0), code), 0.0);
        assert!(amplitude_real_for_code(&interface, a(70.0), code).is_nan());
    }
}
