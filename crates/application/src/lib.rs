#![forbid(unsafe_code)]

pub mod alert_service_impl;
pub mod firestation_service_impl;
pub mod medical_record_service_impl;
pub mod person_service_impl;
