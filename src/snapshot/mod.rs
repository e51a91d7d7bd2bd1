//! Baseline snapshots
//!
//! A snapshot is built from a walk of the root ([`builder`]), persisted as CSV
//! ([`writer`]) and then sealed ([`seal`]): the file is re-digested after the
//! write completes and renamed so its name carries the first 8 hex characters
//! of that digest. [`reader`] and [`verify`] work on snapshots already on disk.

pub mod builder;
pub mod reader;
pub mod seal;
pub mod verify;
pub mod writer;

pub use builder::{build_snapshot, Snapshot, SnapshotBuilder};
pub use reader::read_snapshot;
pub use seal::{seal, sealed_path, Seal};
pub use verify::{recheck, verify_seal, RecheckReport, RecheckStatus, SealCheck};
pub use writer::{write_snapshot, HEADER};
