//! Driven and driving adapters: in-memory storage and the axum REST
//! surface.

#![forbid(unsafe_code)]

pub mod http;
pub mod storage;
