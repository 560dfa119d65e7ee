//! Error types for fill calculations.

use cf_core::error::CfError;
use thiserror::Error;

/// Errors raised by the fill engine.
///
/// Every variant is a caller-correctable invalid argument. Degenerate inputs
/// such as an empty cable list or a zero-size conduit are not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FillError {
    #[error("Negative dimension: {what} = {value}")]
    NegativeDimension { what: &'static str, value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range: {what} = {value} (expected {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown cable topology: {name:?}")]
    UnknownTopology { name: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type FillResult<T> = Result<T, FillError>;

impl FillError {
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

impl From<CfError> for FillError {
    fn from(e: CfError) -> Self {
        match e {
            CfError::NonFinite { what, value } => FillError::NonFinite { what, value },
            CfError::NegativeValue { what, value } => FillError::NegativeDimension { what, value },
            CfError::InvalidArg { what } => FillError::InvalidArg { what },
        }
    }
}

impl From<FillError> for CfError {
    fn from(e: FillError) -> Self {
        match e {
            FillError::NegativeDimension { what, value } => CfError::NegativeValue { what, value },
            FillError::NonFinite { what, value } => CfError::NonFinite { what, value },
            FillError::OutOfRange { what, .. } | FillError::InvalidArg { what } => {
                CfError::InvalidArg { what }
            }
            FillError::UnknownTopology { .. } => CfError::InvalidArg {
                what: "cable topology",
            },
        }
    }
}
