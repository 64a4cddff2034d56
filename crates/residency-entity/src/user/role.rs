//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use residency_core::AppError;

/// Roles known to the residency program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Records punches and activities.
    Resident,
    /// Reviews the journals of supervised residents.
    Preceptor,
    /// Coordinates one program.
    CoordinatorProgram,
    /// Coordinates every program.
    CoordinatorGeneral,
    /// Administrative staff.
    Secretary,
}

impl UserRole {
    /// Whether this role may review journals.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Preceptor)
    }

    /// Return the role as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Preceptor => "preceptor",
            Self::CoordinatorProgram => "coordinator_program",
            Self::CoordinatorGeneral => "coordinator_general",
            Self::Secretary => "secretary",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "resident" => Ok(Self::Resident),
            "preceptor" => Ok(Self::Preceptor),
            "coordinator_program" => Ok(Self::CoordinatorProgram),
            "coordinator_general" => Ok(Self::CoordinatorGeneral),
            "secretary" => Ok(Self::Secretary),
            _ => Err(AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: resident, preceptor, coordinator_program, coordinator_general, secretary"
            ))),
        }
    }
}
