use crate::error::FresnelError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Orientation of the electric field relative to the plane of incidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Polarization {
    /// Transverse to the plane of incidence.
    S,
    /// Parallel to the plane of incidence.
    P,
}

impl Polarization {
    pub const BOTH: [Polarization; 2] = [Polarization::S, Polarization::P];

    /// Looks up a polarization from its single letter code.
    ///
    /// Returns `None` for anything other than `s` or `p`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Self::S),
            "p" => Some(Self::P),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::S => "s",
            Self::P => "p",
        }
    }
}

impl FromStr for Polarization {
    type Err = FresnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| FresnelError::InvalidPolarization(s.to_owned()))
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One value for each polarization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarizationPair<T> {
    pub s: T,
    pub p: T,
}

impl<T> PolarizationPair<T> {
    pub fn new(s: T, p: T) -> Self {
        Self { s, p }
    }

    /// Builds a pair by evaluating `f` once per polarization.
    pub fn from_fn(mut f: impl FnMut(Polarization) -> T) -> Self {
        Self {
            s: f(Polarization::S),
            p: f(Polarization::P),
        }
    }

    pub fn get(&self, polarization: Polarization) -> &T {
        match polarization {
            Polarization::S => &self.s,
            Polarization::P => &self.p,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PolarizationPair<U> {
        PolarizationPair {
            s: f(self.s),
            p: f(self.p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("s", Polarization::S)]
    #[case("p", Polarization::P)]
    fn parse_code(#[case] code: &str, #[case] expected: Polarization) {
        assert_eq!(code.parse::<Polarization>().unwrap(), expected);
        assert_eq!(expected.to_string(), code);
    }

    #[rstest]
    #[case("S")]
    #[case("x")]
    #[case("")]
    #[case("sp")]
    fn reject_unknown_code(#[case] code: &str) {
        assert!(Polarization::from_code(code).is_none());
        assert!(matches!(
            code.parse::<Polarization>(),
            Err(FresnelError::InvalidPolarization(c)) if c == code
        ));
    }

    #[test]
    fn pair_from_fn_visits_s_then_p() {
        let mut seen = Vec::new();
        let pair = PolarizationPair::from_fn(|pol| {
            seen.push(pol);
            pol.code()
        });

        assert_eq!(seen, Polarization::BOTH);
        assert_eq!(pair, PolarizationPair::new("s", "p"));
        assert_eq!(*pair.get(Polarization::P), "p");
    }
}
