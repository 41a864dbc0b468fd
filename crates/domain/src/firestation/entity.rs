use serde::{Deserialize, Serialize};

use crate::common::entity::RecordId;
use crate::common::error::DomainError;

/// One station-to-address coverage row.
///
/// A station number may appear on many rows (one per covered address),
/// and nothing stops two rows from claiming the same address. When a
/// query needs a unique station for an address, the first row in store
/// order wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firestation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub address: String,
    pub station: u32,
}

impl Firestation {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.address.trim().is_empty() {
            return Err(DomainError::InvalidRecord(
                "firestation must have an address".to_string(),
            ));
        }
        if self.station == 0 {
            return Err(DomainError::InvalidRecord(
                "station number must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_row_passes() {
        let f = Firestation {
            id: None,
            address: "1509 Culver St".to_string(),
            station: 3,
        };
        assert!(f.validate().is_ok());
    }

    #[test]
    fn station_zero_is_rejected() {
        let f = Firestation {
            id: None,
            address: "1509 Culver St".to_string(),
            station: 0,
        };
        assert!(f.validate().is_err());
    }
}
