pub mod firestation_store;
pub mod medical_record_store;
pub mod person_store;
