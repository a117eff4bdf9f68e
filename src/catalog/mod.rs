//! The type catalogs: declarative API descriptions the resolver walks.
//!
//! Two dumps feed the engine: the *class catalog* (object types with
//! properties, functions, events, and callbacks) and the *struct catalog*
//! (value types with static/instance members). Both are read-only once
//! loaded. Loading is two-phase per the crate's concurrency model: build a
//! [`CatalogSnapshot`] from parsed dumps, then serve every reader from that
//! immutable snapshot, optionally through the process-wide
//! [`install`]/[`shared`] barrier.
//!
//! Fetching and caching the dump files from disk or network is the host's
//! concern; [`dump`] only provides the parse seam.

pub mod aliases;
mod classes;
pub mod dump;
mod snapshot;
mod structs;

#[cfg(test)]
pub(crate) mod fixtures;

use std::path::PathBuf;
use thiserror::Error;

pub use classes::{
    ClassEntry, ClassMember, EventMember, FunctionMember, MemberSecurity, Parameter,
    PropertyMember, SecurityLevel, TypeCategory, ValueType, tags,
};
pub use snapshot::{CatalogSnapshot, install, shared};
pub use structs::{StructEntry, StructFunction, StructParameter, StructProperty};

/// Errors surfaced by catalog ingestion and the install barrier.
///
/// Failed *lookups* are never errors; the resolver treats them as silent
/// resolution stops. These variants cover broken preconditions and
/// malformed dump input only.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The process-wide snapshot was queried before any was installed.
    #[error("catalogs queried before a snapshot was installed")]
    NotLoaded,

    /// A second snapshot install was attempted; catalogs are load-once.
    #[error("a catalog snapshot is already installed")]
    AlreadyLoaded,

    /// A dump did not match the expected wire format.
    #[error("malformed {kind} dump: {source}")]
    Dump {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A dump file could not be read.
    #[error("failed to read dump file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
