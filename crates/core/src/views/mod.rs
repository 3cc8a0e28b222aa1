//! Per-page view services
//!
//! Each service owns one page's state: it fetches the page's collections
//! (concurrently where independent), derives the view model through the
//! aggregation rules, and exposes that page's mutation actions. All services
//! follow the same contract:
//!
//! - every slice has its own [`LoadState`](crate::fetch::LoadState); a
//!   failed fetch empties that slice and signals an error while sibling
//!   slices stay usable (degraded-partial, applied uniformly)
//! - responses are stamped with a fetch generation and dropped when stale
//! - mutations issue exactly one request, then re-fetch the minimal set of
//!   collections on success; on failure nothing local changes

pub mod agency;
pub mod caseworker;
pub mod chat;
pub mod directory;
pub mod dossier;
pub mod flashcards;
pub mod hmis;
pub mod legal;
pub mod resources;
pub mod sweeps;
pub mod vault;
pub mod workbook;
