#![forbid(unsafe_code)]

pub mod age;
pub mod alert;
pub mod common;
pub mod firestation;
pub mod medical;
pub mod person;
