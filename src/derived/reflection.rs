use super::{diattenuation as normalized_difference, phase, retardance as phase_difference};
use crate::{coefficient::reflection_pair, interface::Interface, polarization::PolarizationPair};
use uom::si::f64::Angle;

/// Phase of the reflected amplitude for each polarization.
pub fn phase_pair(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    reflection_pair(interface, angle).map(phase)
}

/// Phase difference `phase_s - phase_p` introduced on reflection.
///
/// One of `0`, `PI` or `-PI`.
pub fn retardance(interface: &Interface, angle: Angle) -> f64 {
    phase_difference(phase_pair(interface, angle))
}

/// `|Rs - Rp| / (Rs + Rp)` where `Rx = rx^2`.
pub fn diattenuation(interface: &Interface, angle: Angle) -> f64 {
    normalized_difference(reflection_pair(interface, angle).map(|r| r * r))
}

pub fn amplitude_abs(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    reflection_pair(interface, angle).map(f64::abs)
}

pub fn amplitude_real(interface: &Interface, angle: Angle) -> PolarizationPair<f64> {
    reflection_pair(interface, angle)
}

/// Always zero for non-absorbing media.
pub fn amplitude_imaginary(_interface: &Interface, _angle: Angle) -> PolarizationPair<f64> {
    PolarizationPair::new(0., 0.)
}
