//! The chain type resolver, the inference core.
//!
//! Given the text before a cursor and a chain expression ending at it, the
//! resolver walks the chain token by token, carrying the most specific
//! known type of each intermediate expression through class-catalog and
//! struct-catalog lookups. Every lookup miss is a silent stop: the sequence
//! accumulated so far IS the result, and an empty sequence is a valid,
//! non-error outcome.

mod constraint;
mod entity;
mod resolver;

pub use constraint::{ConstraintCandidates, ConstraintKind, ParamConstraint, constraint_candidates};
pub use entity::Entity;
pub use resolver::{EVENT_STRUCT, ResolvedType, infer_at, infer_chain};
