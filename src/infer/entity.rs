//! The resolver's current position in the catalogs.

use crate::catalog::{ClassEntry, StructEntry};

/// What the resolver is standing on between tokens: a class-catalog entry,
/// a struct-catalog entry, or (implicitly, as `Option::None`) nothing,
/// in which case the walk has terminated.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Class(&'a ClassEntry),
    Struct(&'a StructEntry),
}
