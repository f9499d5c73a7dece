use thiserror::Error;

#[derive(Debug, Error)]
pub enum FresnelError {
    #[error("expected refractive index {name} to be finite and greater than zero but got: {value}")]
    InvalidIndex { name: &'static str, value: f64 },
    #[error("expected polarization `s` or `p` but got: {0:?}")]
    InvalidPolarization(String),
    #[error("unknown quantity: {0:?}")]
    UnknownQuantity(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FresnelError>;
