use thiserror::Error;

pub type CfResult<T> = Result<T, CfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    NegativeValue { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = CfError::NegativeValue {
            what: "sheath thickness",
            value: -1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("sheath thickness"));
        assert!(msg.contains("-1.5"));
    }
}
