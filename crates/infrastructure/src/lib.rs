//! Infrastructure: configuration, logging, constants, fixture loading.

#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod data_loader;
pub mod logging;
