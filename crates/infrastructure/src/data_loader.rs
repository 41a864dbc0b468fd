//! Startup fixture loading.
//!
//! Reads a `data.json` fixture (`persons`, `firestations`,
//! `medicalrecords` sections) and saves every record through the store
//! ports in file order. Ids are stripped before saving so each store's
//! own sequence numbers the records; parallel person and medical-record
//! lists therefore end up with aligned ids, which the alert queries
//! depend on.

use std::path::Path;
use std::sync::Arc;

use domain::firestation::entity::Firestation;
use domain::medical::entity::MedicalRecord;
use domain::person::entity::Person;
use ports::secondary::firestation_store::FirestationStore;
use ports::secondary::medical_record_store::MedicalRecordStore;
use ports::secondary::person_store::PersonStore;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("I/O error reading fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fixture rejected by store: {0}")]
    Store(#[from] domain::common::error::DomainError),
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    persons: Vec<Person>,

    #[serde(default)]
    firestations: Vec<Firestation>,

    #[serde(default, rename = "medicalrecords")]
    medical_records: Vec<MedicalRecord>,
}

/// Per-section record counts after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub persons: usize,
    pub firestations: usize,
    pub medical_records: usize,
}

pub struct DataLoader {
    persons: Arc<dyn PersonStore>,
    firestations: Arc<dyn FirestationStore>,
    medical_records: Arc<dyn MedicalRecordStore>,
}

impl DataLoader {
    pub fn new(
        persons: Arc<dyn PersonStore>,
        firestations: Arc<dyn FirestationStore>,
        medical_records: Arc<dyn MedicalRecordStore>,
    ) -> Self {
        Self {
            persons,
            firestations,
            medical_records,
        }
    }

    /// Load a fixture file into the three stores.
    pub fn load_file(&self, path: &Path) -> Result<LoadSummary, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        self.load_str(&content)
    }

    /// Load fixture JSON into the three stores.
    pub fn load_str(&self, json: &str) -> Result<LoadSummary, FixtureError> {
        let fixture: FixtureFile = serde_json::from_str(json)?;

        let summary = LoadSummary {
            persons: fixture.persons.len(),
            firestations: fixture.firestations.len(),
            medical_records: fixture.medical_records.len(),
        };

        for mut person in fixture.persons {
            person.id = None;
            self.persons.save(person)?;
        }
        tracing::info!(count = summary.persons, "persons loaded");

        for mut firestation in fixture.firestations {
            firestation.id = None;
            self.firestations.save(firestation)?;
        }
        tracing::info!(count = summary.firestations, "firestations loaded");

        for mut record in fixture.medical_records {
            record.id = None;
            self.medical_records.save(record)?;
        }
        tracing::info!(count = summary.medical_records, "medical records loaded");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::common::entity::RecordId;
    use ports::test_utils::{FakeFirestationStore, FakeMedicalRecordStore, FakePersonStore};

    const FIXTURE: &str = r#"{
        "persons": [
            {"firstName":"John","lastName":"Boyd","address":"1509 Culver St",
             "city":"Culver","zip":"97451","phone":"841-874-6512","email":"jaboyd@email.com"},
            {"firstName":"Jacob","lastName":"Boyd","address":"1509 Culver St",
             "city":"Culver","zip":"97451","phone":"841-874-6513","email":"drk@email.com"}
        ],
        "firestations": [
            {"address":"1509 Culver St","station":3}
        ],
        "medicalrecords": [
            {"firstName":"John","lastName":"Boyd","birthdate":"03/06/1984",
             "medications":["aznol:350mg"],"allergies":["nillacilan"]},
            {"firstName":"Jacob","lastName":"Boyd","birthdate":"03/06/1989",
             "medications":[],"allergies":[]}
        ]
    }"#;

    fn loader() -> (
        Arc<FakePersonStore>,
        Arc<FakeMedicalRecordStore>,
        DataLoader,
    ) {
        let persons = Arc::new(FakePersonStore::default());
        let records = Arc::new(FakeMedicalRecordStore::default());
        let loader = DataLoader::new(
            Arc::clone(&persons) as Arc<dyn PersonStore>,
            Arc::new(FakeFirestationStore::default()),
            Arc::clone(&records) as Arc<dyn MedicalRecordStore>,
        );
        (persons, records, loader)
    }

    #[test]
    fn load_reports_section_counts() {
        let (_, _, loader) = loader();
        let summary = loader.load_str(FIXTURE).unwrap();
        assert_eq!(summary.persons, 2);
        assert_eq!(summary.firestations, 1);
        assert_eq!(summary.medical_records, 2);
    }

    #[test]
    fn parallel_lists_get_aligned_ids() {
        let (persons, records, loader) = loader();
        loader.load_str(FIXTURE).unwrap();

        let persons = persons.find_all().unwrap();
        let records = records.find_all().unwrap();
        assert_eq!(persons[0].id, Some(RecordId(1)));
        assert_eq!(records[0].id, Some(RecordId(1)));
        assert_eq!(persons[1].id, records[1].id);
        // Same fixture row describes the same person.
        assert_eq!(persons[1].first_name, records[1].first_name);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let (_, _, loader) = loader();
        let summary = loader.load_str("{}").unwrap();
        assert_eq!(summary.persons, 0);
        assert_eq!(summary.firestations, 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let (_, _, loader) = loader();
        assert!(matches!(
            loader.load_str("{nope"),
            Err(FixtureError::Parse(_))
        ));
    }
}
