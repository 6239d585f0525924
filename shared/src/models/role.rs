//! User roles and the role hierarchy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role in the organisation
///
/// Variant order defines the hierarchy, so `Ord` gives the rank
/// comparison directly: `Employee < OfficeLead < Registrar < Admin`.
///
/// The wire format keeps the original Hungarian role names so that
/// records written by the previous system deserialize unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular employee (rank 0)
    #[serde(rename = "felhasznalo")]
    Employee,
    /// Office lead, reviews requests from their office (rank 1)
    #[serde(rename = "irodavezeto")]
    OfficeLead,
    /// Registrar, town-hall wide oversight (rank 2)
    #[serde(rename = "jegyzo")]
    Registrar,
    /// HR administrator, full access (rank 3)
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Numeric rank used for hierarchy comparisons
    pub fn rank(&self) -> u8 {
        match self {
            Self::Employee => 0,
            Self::OfficeLead => 1,
            Self::Registrar => 2,
            Self::Admin => 3,
        }
    }

    /// Whether this role's rank is at least `other`'s rank
    pub fn at_least(&self, other: Role) -> bool {
        *self >= other
    }

    /// Wire representation of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "felhasznalo",
            Self::OfficeLead => "irodavezeto",
            Self::Registrar => "jegyzo",
            Self::Admin => "admin",
        }
    }

    /// Map a legacy capability string to the role it implies.
    ///
    /// The previous system attached capability labels such as
    /// `"irodavezeto.approve"` to users instead of a single role field.
    /// The prefix before the first dot carries the role; `hr.*` labels
    /// belonged to the HR admin account. Returns `None` for labels that
    /// carry no role information.
    pub fn from_capability(capability: &str) -> Option<Role> {
        let prefix = capability.split('.').next()?;
        match prefix {
            "felhasznalo" => Some(Self::Employee),
            "irodavezeto" => Some(Self::OfficeLead),
            "jegyzo" => Some(Self::Registrar),
            "hr" | "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "felhasznalo" => Ok(Self::Employee),
            "irodavezeto" => Ok(Self::OfficeLead),
            "jegyzo" => Ok(Self::Registrar),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Role::Employee < Role::OfficeLead);
        assert!(Role::OfficeLead < Role::Registrar);
        assert!(Role::Registrar < Role::Admin);
        assert!(Role::Admin.at_least(Role::Employee));
        assert!(!Role::Employee.at_least(Role::OfficeLead));
        assert!(Role::Registrar.at_least(Role::Registrar));
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::OfficeLead).unwrap(),
            "\"irodavezeto\""
        );
        let role: Role = serde_json::from_str("\"jegyzo\"").unwrap();
        assert_eq!(role, Role::Registrar);
    }

    #[test]
    fn test_from_capability() {
        // "reqest" is a historical typo preserved in old records
        assert_eq!(
            Role::from_capability("felhasznalo.reqest"),
            Some(Role::Employee)
        );
        assert_eq!(
            Role::from_capability("irodavezeto.approve"),
            Some(Role::OfficeLead)
        );
        assert_eq!(Role::from_capability("jegyzo.view"), Some(Role::Registrar));
        assert_eq!(Role::from_capability("hr.manage"), Some(Role::Admin));
        assert_eq!(Role::from_capability("unknown.thing"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("manager".parse::<Role>().is_err());
    }
}
