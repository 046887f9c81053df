//! Core data models
//!
//! - `digest`: content digest codec (`algorithm:hex`)
//! - `name`: model names (`namespace[:tag]`)
//! - `manifest`: the per-model JSON manifest and its digest set

pub mod digest;
pub mod manifest;
pub mod name;

pub use digest::Digest;
pub use manifest::{Manifest, ManifestEntry};
pub use name::ModelName;
