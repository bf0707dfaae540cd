//! `storefront-api` — HTTP adapter over the catalog and order services.
//!
//! Thin by design: routing, JSON (de)serialization and status-code mapping
//! only. All invariants live in the domain crates.

pub mod app;
