use serde::{Deserialize, Serialize};

use crate::common::entity::RecordId;
use crate::common::error::DomainError;

/// Medical history for one person.
///
/// The record's id is expected to equal the id of the person it
/// describes; every alert query joins on that shared id rather than on
/// names. The data model does not enforce the correspondence — stores
/// loaded from parallel fixture lists keep it by construction, anything
/// else is the operator's problem (see `JoinMode` in the alert engine
/// for the name-based escape hatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    /// `MM/DD/YYYY`. Kept as a raw string; parsing happens at query
    /// time and malformed values silently age the person as 0.
    pub birthdate: String,
    /// Typically `"name:dosage"`, uninterpreted.
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl MedicalRecord {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(DomainError::InvalidRecord(
                "medical record must name its person".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{"firstName":"John","lastName":"Boyd","birthdate":"03/06/1984"}"#;
        let rec: MedicalRecord = serde_json::from_str(json).unwrap();
        assert!(rec.medications.is_empty());
        assert!(rec.allergies.is_empty());
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn nameless_record_is_rejected() {
        let rec = MedicalRecord {
            id: None,
            first_name: String::new(),
            last_name: "Boyd".to_string(),
            birthdate: "03/06/1984".to_string(),
            medications: vec![],
            allergies: vec![],
        };
        assert!(rec.validate().is_err());
    }
}
