// #![warn(missing_docs)]

//! Fresnel Reflection and Transmission Utilities
//!
//! Computes the Fresnel coefficients of a planar interface between two
//! non-absorbing media and the quantities derived from them, and sweeps any
//! of those quantities over incidence angles from 0 to 90 degrees.
//!
//! ```
//! use fresnel::{Interface, QuantityKind, sweep};
//!
//! let interface = Interface::new(1.0, 1.5).unwrap();
//! let series = sweep(&interface, QuantityKind::ReflectedIntensity);
//! assert_eq!(series.s.len(), 91);
//! ```

#[allow(missing_docs)]
pub mod error;

pub mod coefficient;
pub mod derived;
pub mod interface;
pub mod params;
pub mod polarization;
pub mod render;
pub mod sweep;

pub use error::{FresnelError, Result};
pub use interface::{Interface, Refraction};
pub use params::SweepParams;
pub use polarization::{Polarization, PolarizationPair};
pub use sweep::{QuantityKind, Render, SweepSeries, par_sweep, sweep};
