//! Fresnel amplitude and power coefficients for a single polarization.
//!
//! All media are non-absorbing, so every coefficient here is a real number.
//! The three entry points treat total internal reflection differently:
//!
//! | function                    | past the critical angle |
//! |-----------------------------|-------------------------|
//! | [`reflection`]              | NaN, no guard           |
//! | [`transmittance`]           | `0.0`                   |
//! | [`transmission_amplitude`]  | [`Refraction::TotalInternalReflection`] for the caller to handle |

use crate::{
    interface::{Interface, Refraction},
    polarization::{Polarization, PolarizationPair},
};
use uom::si::f64::Angle;

/// Reflection amplitude coefficients `rs` and `rp` from the incident and
/// transmitted cosines.
///
/// ```text
/// rs = (n1 cos_i - n2 cos_t) / (n1 cos_i + n2 cos_t)
/// rp = (n2 cos_i - n1 cos_t) / (n2 cos_i + n1 cos_t)
/// ```
fn reflection_from_cosines(interface: &Interface, cos_i: f64, cos_t: f64) -> PolarizationPair<f64> {
    let (n1, n2) = (interface.n1(), interface.n2());
    PolarizationPair::new(
        (n1 * cos_i - n2 * cos_t) / (n1 * cos_i + n2 * cos_t),
        (n2 * cos_i - n1 * cos_t) / (n2 * cos_i + n1 * cos_t),
    )
}

/// Reflection amplitude coefficients for both polarizations.
///
/// The transmitted cosine is taken without checking for total internal
/// reflection, so both coefficients are NaN past the critical angle.
pub fn reflection_pair(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    let (cos_i, cos_t) = interface.cosines_unchecked(angle);
    reflection_from_cosines(interface, cos_i, cos_t)
}

/// Reflection amplitude coefficient for `polarization`.
pub fn reflection(interface: &Interface, angle: Angle, polarization: Polarization) -> f64 {
    *reflection_pair(interface, angle).get(polarization)
}

/// Reflection amplitude coefficient looked up by a raw polarization code.
///
/// Any code other than `s` selects the p coefficient.
pub fn reflection_for_code(interface: &Interface, angle: Angle, code: &str) -> f64 {
    let polarization = match Polarization::from_code(code) {
        Some(Polarization::S) => Polarization::S,
        _ => Polarization::P,
    };
    reflection(interface, angle, polarization)
}

/// Transmitted power for both polarizations.
///
/// Derived from energy conservation `T = (1 - r^2) n2 / n1` rather than from
/// the transmitted amplitude. Both values are exactly `0.0` past the critical
/// angle.
pub fn transmittance_pair(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    match interface.refract(angle) {
        Refraction::TotalInternalReflection { .. } => PolarizationPair::new(0., 0.),
        Refraction::Transmitted { cos_i, cos_t } => {
            let scale = interface.n2() / interface.n1();
            reflection_from_cosines(interface, cos_i, cos_t).map(|r| (1. - r * r) * scale)
        }
    }
}

/// Transmitted power for `polarization`.
pub fn transmittance(interface: &Interface, angle: Angle, polarization: Polarization) -> f64 {
    *transmittance_pair(interface, angle).get(polarization)
}

/// Transmitted power looked up by a raw polarization code.
///
/// Any code other than `s` or `p` transmits nothing.
pub fn transmittance_for_code(interface: &Interface, angle: Angle, code: &str) -> f64 {
    match Polarization::from_code(code) {
        Some(polarization) => transmittance(interface, angle, polarization),
        None => 0.,
    }
}

/// Transmission amplitude coefficients `ts` and `tp`.
///
/// ```text
/// ts = 2 n1 cos_i / (n1 cos_i + n2 cos_t)
/// tp = 2 n1 cos_i / (n2 cos_i + n1 cos_t)
/// ```
///
/// Past the critical angle no amplitude is computed and the guard is handed
/// back so each derived quantity can pick its own sentinel.
pub fn transmission_amplitude(
    interface: &Interface,
    angle: Angle,
) -> Result<PolarizationPair<f64>, Refraction> {
    match interface.refract(angle) {
        tir @ Refraction::TotalInternalReflection { .. } => Err(tir),
        Refraction::Transmitted { cos_i, cos_t } => {
            let (n1, n2) = (interface.n1(), interface.n2());
            let incident = 2. * n1 * cos_i;
            Ok(PolarizationPair::new(
                incident / (n1 * cos_i + n2 * cos_t),
                incident / (n2 * cos_i + n1 * cos_t),
            ))
        }
    }
}
