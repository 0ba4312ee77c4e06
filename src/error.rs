use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TempoDspError {
    InvalidParameter { name: &'static str, value: f64 },
    NonFiniteCoefficients,
}

impl fmt::Display for TempoDspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempoDspError::InvalidParameter { name, value } => {
                write!(f, "Invalid filter parameter {name} = {value}")
            }
            TempoDspError::NonFiniteCoefficients => {
                write!(f, "Filter parameters produce non-finite coefficients")
            }
        }
    }
}

impl std::error::Error for TempoDspError {}
