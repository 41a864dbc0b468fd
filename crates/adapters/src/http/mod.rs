pub mod alert_handler;
pub mod error;
pub mod firestation_handler;
pub mod health_handler;
pub mod medical_record_handler;
pub mod openapi;
pub mod person_handler;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;
