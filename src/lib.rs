//! modelbak - Backup and restore tool for locally-stored Ollama models
//!
//! Ollama keeps each model as a small JSON manifest plus a set of
//! content-addressed blobs. This library copies both into self-contained,
//! timestamped backup sets, validates sets (structure, blob presence,
//! optional sha256 verification), catalogs them, and merges them back into
//! a live store.
//!
//! # Architecture
//!
//! - `config`: store path schema and live-store resolution (`OLLAMA_MODELS`)
//! - `error`: custom error types
//! - `models`: digest codec, model names, manifest reader
//! - `storage`: blob store access and manifest-tree traversal
//! - `backup`: the core operations (writer, validator, restore, catalog)
//! - `ollama`: external `ollama list` collaborator
//! - `display`: terminal formatting
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use modelbak::backup::{backup_model, validate};
//! use modelbak::config::StorePaths;
//! use modelbak::models::ModelName;
//!
//! let live = StorePaths::from_env()?;
//! let model = ModelName::parse("llama3:8b")?;
//! let outcome = backup_model(&live, &model, "ModelBakup".as_ref())?;
//! let report = validate(&outcome.backup_root, true)?;
//! assert!(report.is_passing());
//! ```
//!
//! The tool is single-threaded and synchronous and implements no locking;
//! concurrent invocations against the same store are not supported.

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod ollama;
pub mod storage;

pub use error::{ModelBakError, ModelBakResult};
