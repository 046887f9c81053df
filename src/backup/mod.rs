//! Backup operations
//!
//! The four core operations over backup sets:
//!
//! - `writer`: materialize a new set from the live store (best-effort)
//! - `validate`: exhaustive structure/presence/hash checking (read-only)
//! - `restore`: merge a set back into a live store (overwrite on conflict)
//! - `catalog`: discover, summarize, and describe sets under a root
//!
//! A backup set is a self-contained store snapshot for one model, created
//! wholesale in a fresh timestamped directory and never partially updated
//! afterward. The validator is the single source of truth for whether a set
//! is restorable; catalog and callers of restore delegate to it.

pub mod catalog;
pub mod restore;
pub mod validate;
pub mod writer;

pub use catalog::{describe, discover, sort_by_size, summarize, CatalogEntry, CatalogSummary};
pub use restore::{restore_backup, RestoreOutcome};
pub use validate::{validate, HashMismatch, ManifestProblem, ValidationReport};
pub use writer::{backup_model, BackupOutcome};
