//! `tc-persist` — the on-disk artifact between the two CLI phases.
//!
//! The archive is a `bincode`-encoded [`Archive`] value: catalogue records
//! plus the render and routing settings, in a schema independent of the
//! in-memory store.  Buses are stored with their computed route length and
//! curvature and restored without recomputation, so a reloaded catalogue
//! answers every query with the exact same numbers it was saved with.
//!
//! Encoding is deterministic: stops and buses in id order, distance rows
//! sorted by `(from, to)`.

mod archive;
mod error;

#[cfg(test)]
mod tests;

pub use archive::{load_archive, save_archive, Archive};
pub use error::{PersistError, PersistResult};
