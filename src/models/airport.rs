use crate::errors::{AppError, AppResult};
use serde::{Serialize, Serializer};
use std::fmt;

/// IATA-style station code: exactly three uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    code: String,
}

impl Airport {
    pub fn new(code: &str) -> AppResult<Self> {
        if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self {
                code: code.to_string(),
            })
        } else {
            Err(AppError::InvalidAirport(code.to_string()))
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for Airport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
