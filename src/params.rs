use crate::{error::Result, interface::Interface, sweep::QuantityKind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs for one angle sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepParams {
    /// Refractive index of the incident medium.
    pub n1: f64,
    /// Refractive index of the transmitting medium.
    pub n2: f64,
    pub quantity: QuantityKind,
}

impl SweepParams {
    /// Validates the indices and builds the `Interface` to sweep.
    pub fn interface(&self) -> Result<Interface> {
        Interface::new(self.n1, self.n2)
    }

    /// Reads parameters from a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let serialized = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&serialized)?)
    }
}

impl Default for SweepParams {
    fn default() -> Self {
        // Air to crown glass.
        Self {
            n1: 1.0,
            n2: 1.5,
            quantity: QuantityKind::ReflectedIntensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FresnelError;

    #[test]
    fn default_is_air_to_glass() {
        let interface = SweepParams::default().interface().unwrap();
        assert_eq!((interface.n1(), interface.n2()), (1.0, 1.5));
    }

    #[test]
    fn rejects_non_positive_index() {
        let params = SweepParams {
            n2: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.interface(),
            Err(FresnelError::InvalidIndex { name: "n2", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_json() {
        let params: SweepParams = serde_json::from_str(
            r#"{ "n1": 1.5, "n2": 1.0, "quantity": "transmitted-amplitude-abs" }"#,
        )
        .unwrap();

        assert_eq!(
            params,
            SweepParams {
                n1: 1.5,
                n2: 1.0,
                quantity: QuantityKind::TransmittedAmplitudeAbs,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_quantity_is_a_json_error() {
        let result: std::result::Result<SweepParams, _> =
            serde_json::from_str(r#"{ "n1": 1.0, "n2": 1.5, "quantity": "reflejada" }"#);
        assert!(result.is_err());
    }
}
