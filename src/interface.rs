use crate::error::FresnelError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{angle::radian, f64::Angle};

/// A planar boundary between two non-absorbing media.
///
/// `n1` is the index of the medium the light arrives from and `n2` the index
/// of the medium it enters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interface {
    n1: f64,
    n2: f64,
}

impl Interface {
    /// Creates a new `Interface` from the incident index `n1` and the
    /// transmitted index `n2`.
    ///
    /// Returns an error if either index is not finite or not greater than zero.
    pub fn new(n1: f64, n2: f64) -> Result<Self, FresnelError> {
        check_index("n1", n1)?;
        check_index("n2", n2)?;
        Ok(Self { n1, n2 })
    }

    pub fn n1(&self) -> f64 {
        self.n1
    }

    pub fn n2(&self) -> f64 {
        self.n2
    }

    /// The ratio `n1 / n2` that scales the sine in Snell's law.
    pub fn relative_index(&self) -> f64 {
        self.n1 / self.n2
    }

    /// Resolves the transmitted ray for light arriving at `angle` from the
    /// surface normal.
    pub fn refract(&self, angle: Angle) -> Refraction {
        let theta = angle.get::<radian>();
        let sin_t = self.relative_index() * theta.sin();

        if sin_t > 1. {
            tracing::trace!(n1 = self.n1, n2 = self.n2, sin_t, "total internal reflection");
            return Refraction::TotalInternalReflection { sin_t };
        }

        Refraction::Transmitted {
            cos_i: theta.cos(),
            cos_t: (1. - sin_t * sin_t).sqrt(),
        }
    }

    /// Cosines of the incident and transmitted angles without checking for
    /// total internal reflection.
    ///
    /// Past the critical angle the transmitted cosine is NaN.
    pub fn cosines_unchecked(&self, angle: Angle) -> (f64, f64) {
        let theta = angle.get::<radian>();
        let sin_t = self.relative_index() * theta.sin();
        (theta.cos(), (1. - sin_t * sin_t).sqrt())
    }

    /// The incidence angle past which no light is transmitted.
    ///
    /// Returns `None` when `n1 <= n2` since total internal reflection cannot occur.
    pub fn critical_angle(&self) -> Option<Angle> {
        match self.n1 > self.n2 {
            true => Some(Angle::new::<radian>((self.n2 / self.n1).asin())),
            false => None,
        }
    }

    /// The incidence angle at which p-polarized light is not reflected.
    pub fn brewster_angle(&self) -> Angle {
        Angle::new::<radian>((self.n2 / self.n1).atan())
    }
}

/// Creates an `Interface` without validating the indices.
///
/// Degenerate indices propagate as infinite or NaN coefficients.
impl From<(f64, f64)> for Interface {
    fn from((n1, n2): (f64, f64)) -> Self {
        Self { n1, n2 }
    }
}

fn check_index(name: &'static str, value: f64) -> Result<(), FresnelError> {
    match value.is_finite() && value > 0. {
        true => Ok(()),
        false => Err(FresnelError::InvalidIndex { name, value }),
    }
}

/// Outcome of applying Snell's law at an `Interface`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Refraction {
    /// A real transmitted angle exists.
    Transmitted { cos_i: f64, cos_t: f64 },
    /// The sine of the transmitted angle exceeds one.
    TotalInternalReflection { sin_t: f64 },
}

impl Refraction {
    pub fn is_total_internal_reflection(&self) -> bool {
        matches!(self, Self::TotalInternalReflection { .. })
    }
}
