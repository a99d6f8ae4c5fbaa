//! Shared data model layer (types/constants only).
//!
//! ## Purpose
//! - Keep ID, report and preference types in one place.
//! - Avoid cyclic imports between services and command handlers.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — ID number, decoded fields, reports, preferences.
//! - `errors.rs` — verification failure taxonomy.
//! - `constants.rs` — digit positions, thresholds, fixed output strings.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or console side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod errors;
pub mod models;
