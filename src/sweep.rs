use crate::{
    coefficient::{reflection_pair, transmittance_pair},
    derived::{reflection, transmission},
    error::{FresnelError, Result},
    interface::Interface,
    polarization::PolarizationPair,
};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive, str::FromStr};
use uom::si::{angle::degree, f64::Angle};

/// Incidence angles in whole degrees visited by a sweep.
pub const SWEEP_DEGREES: RangeInclusive<u32> = 0..=90;

/// The quantity computed at each angle of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum QuantityKind {
    /// Squared reflection amplitude.
    ReflectedIntensity,
    /// Squared transmitted power.
    TransmittedIntensity,
    AmplitudeAbs,
    AmplitudeReal,
    AmplitudeImaginary,
    AmplitudePhase,
    Diattenuation,
    Retardance,
    TransmittedDiattenuation,
    TransmittedRetardance,
    TransmittedAmplitudeAbs,
    TransmittedPhase,
    TransmittedAmplitudeReal,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 13] = [
        Self::ReflectedIntensity,
        Self::TransmittedIntensity,
        Self::AmplitudeAbs,
        Self::AmplitudeReal,
        Self::AmplitudeImaginary,
        Self::AmplitudePhase,
        Self::Diattenuation,
        Self::Retardance,
        Self::TransmittedDiattenuation,
        Self::TransmittedRetardance,
        Self::TransmittedAmplitudeAbs,
        Self::TransmittedPhase,
        Self::TransmittedAmplitudeReal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::ReflectedIntensity => "reflected-intensity",
            Self::TransmittedIntensity => "transmitted-intensity",
            Self::AmplitudeAbs => "amplitude-abs",
            Self::AmplitudeReal => "amplitude-real",
            Self::AmplitudeImaginary => "amplitude-imaginary",
            Self::AmplitudePhase => "amplitude-phase",
            Self::Diattenuation => "diattenuation",
            Self::Retardance => "retardance",
            Self::TransmittedDiattenuation => "transmitted-diattenuation",
            Self::TransmittedRetardance => "transmitted-retardance",
            Self::TransmittedAmplitudeAbs => "transmitted-amplitude-abs",
            Self::TransmittedPhase => "transmitted-phase",
            Self::TransmittedAmplitudeReal => "transmitted-amplitude-real",
        }
    }

    /// Returns `true` if the quantity has one value per polarization.
    pub fn is_pair(&self) -> bool {
        !matches!(
            self,
            Self::Diattenuation
                | Self::Retardance
                | Self::TransmittedDiattenuation
                | Self::TransmittedRetardance
        )
    }

    /// Evaluates the quantity for light arriving at `angle`.
    pub fn evaluate(&self, interface: &Interface, angle: Angle) -> Sample {
        match self {
            Self::ReflectedIntensity => Sample::Pair(reflection_pair(interface, angle).map(|r| r * r)),
            Self::TransmittedIntensity => {
                Sample::Pair(transmittance_pair(interface, angle).map(|t| t * t))
            }
            Self::AmplitudeAbs => Sample::Pair(reflection::amplitude_abs(interface, angle)),
            Self::AmplitudeReal => Sample::Pair(reflection::amplitude_real(interface, angle)),
            Self::AmplitudeImaginary => {
                Sample::Pair(reflection::amplitude_imaginary(interface, angle))
            }
            Self::AmplitudePhase => Sample::Pair(reflection::phase_pair(interface, angle)),
            Self::Diattenuation => Sample::Scalar(reflection::diattenuation(interface, angle)),
            Self::Retardance => Sample::Scalar(reflection::retardance(interface, angle)),
            Self::TransmittedDiattenuation => {
                Sample::Scalar(transmission::diattenuation(interface, angle))
            }
            Self::TransmittedRetardance => {
                Sample::Scalar(transmission::retardance(interface, angle))
            }
            Self::TransmittedAmplitudeAbs => {
                Sample::Pair(transmission::amplitude_abs(interface, angle))
            }
            Self::TransmittedPhase => Sample::Pair(transmission::amplitude_phase(interface, angle)),
            Self::TransmittedAmplitudeReal => {
                Sample::Pair(transmission::amplitude_real(interface, angle))
            }
        }
    }
}

impl FromStr for QuantityKind {
    type Err = FresnelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| FresnelError::UnknownQuantity(s.to_owned()))
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A quantity evaluated at one angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    Pair(PolarizationPair<f64>),
    Scalar(f64),
}

/// Parallel series of a quantity over the sweep angles.
///
/// `p` is empty for quantities that combine both polarizations into one value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepSeries {
    pub angles: Vec<f64>,
    pub s: Vec<f64>,
    pub p: Vec<f64>,
}

impl SweepSeries {
    fn from_samples(samples: impl IntoIterator<Item = (u32, Sample)>) -> Self {
        let mut series = Self::default();
        for (angle, sample) in samples {
            series.angles.push(angle as f64);
            match sample {
                Sample::Pair(pair) => {
                    series.s.push(pair.s);
                    series.p.push(pair.p);
                }
                Sample::Scalar(value) => series.s.push(value),
            }
        }
        series
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Returns `true` if a p series accompanies the s series.
    pub fn has_p(&self) -> bool {
        !self.p.is_empty()
    }
}

fn sample_at(interface: &Interface, kind: QuantityKind, deg: u32) -> (u32, Sample) {
    (deg, kind.evaluate(interface, Angle::new::<degree>(deg as f64)))
}

/// Evaluates `kind` at every whole degree from 0 to 90.
pub fn sweep(interface: &Interface, kind: QuantityKind) -> SweepSeries {
    tracing::debug!(n1 = interface.n1(), n2 = interface.n2(), %kind, "sweeping");
    SweepSeries::from_samples(SWEEP_DEGREES.map(|deg| sample_at(interface, kind, deg)))
}

/// Evaluates `kind` at every whole degree from 0 to 90 in parallel.
///
/// Produces the same series as [`sweep`].
pub fn par_sweep(interface: &Interface, kind: QuantityKind) -> SweepSeries {
    tracing::debug!(n1 = interface.n1(), n2 = interface.n2(), %kind, "sweeping in parallel");
    let samples: Vec<(u32, Sample)> = SWEEP_DEGREES
        .into_par_iter()
        .map(|deg| sample_at(interface, kind, deg))
        .collect();
    SweepSeries::from_samples(samples)
}

/// Consumes a finished sweep, e.g. to draw or store it.
pub trait Render {
    fn render(&mut self, kind: QuantityKind, series: &SweepSeries) -> Result<()>;
}
