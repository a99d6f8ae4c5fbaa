//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `checksum.rs` — Luhn-style check digit.
//! - `dob.rs` — `YYMMDD` validation and century resolution.
//! - `decoder.rs` — age/gender/citizenship extraction.
//! - `verifier.rs` — format → checksum → date → decode state machine.
//! - `session.rs` — interactive menu and retry loops.
//! - `result_log.rs` — append-only verification log.
//! - `preferences.rs` — preference store trait and backends.
//! - `output.rs` — text rendering and JSON envelopes.
//!
//! ## Conventions
//! - The first four services are pure: no I/O, no clock reads.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod checksum;
pub mod decoder;
pub mod dob;
pub mod output;
pub mod preferences;
pub mod result_log;
pub mod session;
pub mod verifier;
