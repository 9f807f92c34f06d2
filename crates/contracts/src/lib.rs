//! Shared contracts between frontend and the recruiting REST backend.
//!
//! Domain aggregates, DTOs and the form-schema / review-authorization core
//! live here so they can be unit-tested on the host, независимо от WASM.

pub mod domain;
pub mod enums;
pub mod system;
