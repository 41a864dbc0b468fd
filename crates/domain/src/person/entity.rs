use serde::{Deserialize, Serialize};

use crate::common::entity::RecordId;
use crate::common::error::DomainError;

/// A resident known to the service.
///
/// No uniqueness is enforced beyond the id: several persons may share
/// an address (a household) or a last name (a family).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Assigned by the store on first save; absent on incoming records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

impl Person {
    /// Minimal save-time validation: a person must at least be nameable.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(DomainError::InvalidRecord(
                "person must have a first and last name".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person {
            id: None,
            first_name: "John".to_string(),
            last_name: "Boyd".to_string(),
            address: "1509 Culver St".to_string(),
            city: "Culver".to_string(),
            zip: "97451".to_string(),
            phone: "841-874-6512".to_string(),
            email: "jaboyd@email.com".to_string(),
        }
    }

    #[test]
    fn valid_person_passes() {
        assert!(person().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut p = person();
        p.last_name = "  ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_string(&person()).unwrap();
        assert!(json.contains("\"firstName\":\"John\""));
        assert!(json.contains("\"lastName\":\"Boyd\""));
        // Unsaved person carries no id on the wire.
        assert!(!json.contains("\"id\""));
    }
}
