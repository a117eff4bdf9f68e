//! Constructor-argument constraints.
//!
//! Struct function parameters may carry a constraint string of the form
//! `ObjectType:ConstraintKind`, restricting which class names are valid
//! arguments. Completion providers query the class catalog through the
//! constraint to offer candidate names mid-argument.

use smol_str::SmolStr;

use crate::catalog::CatalogSnapshot;

/// A parsed parameter constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamConstraint {
    /// Root class the argument must relate to.
    pub object_type: SmolStr,
    pub kind: ConstraintKind,
}

/// How a constraint restricts candidate classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Any subtype of the object type (itself included).
    Subtype,
    /// Subtypes scripts may instantiate: excludes classes tagged
    /// NotCreatable and services.
    Creatable,
    /// Kinds this build does not recognize; they yield no candidates.
    Unknown,
}

impl ParamConstraint {
    /// Parse an `ObjectType:ConstraintKind` string.
    pub fn parse(constraint: &str) -> Option<Self> {
        let (object_type, kind) = constraint.split_once(':')?;
        if object_type.is_empty() {
            return None;
        }
        let kind = match kind {
            "isInstance" => ConstraintKind::Subtype,
            "isCreatable" => ConstraintKind::Creatable,
            _ => ConstraintKind::Unknown,
        };
        Some(Self {
            object_type: object_type.into(),
            kind,
        })
    }

    /// Human-readable description of what the constraint accepts.
    pub fn describe(&self) -> String {
        match self.kind {
            ConstraintKind::Subtype => format!("any {} subtype", self.object_type),
            ConstraintKind::Creatable => {
                format!("{} subtypes creatable from scripts", self.object_type)
            }
            ConstraintKind::Unknown => String::new(),
        }
    }
}

/// Candidate class names satisfying a constraint, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintCandidates {
    /// What the constraint accepts, for display next to the list.
    pub description: String,
    pub names: Vec<SmolStr>,
}

/// Candidate class names for a raw constraint string.
///
/// Unparseable constraints and unknown kinds yield an empty candidate
/// list: a resolution stop, not an error.
pub fn constraint_candidates(snapshot: &CatalogSnapshot, constraint: &str) -> ConstraintCandidates {
    let Some(parsed) = ParamConstraint::parse(constraint) else {
        return ConstraintCandidates::default();
    };

    let accept: fn(&CatalogSnapshot, &str, &crate::catalog::ClassEntry) -> bool =
        match parsed.kind {
            ConstraintKind::Subtype => {
                |snapshot, root, class| snapshot.is_subclass_of(&class.name, root)
            }
            ConstraintKind::Creatable => {
                |snapshot, root, class| {
                    snapshot.is_subclass_of(&class.name, root) && class.is_creatable()
                }
            }
            ConstraintKind::Unknown => return ConstraintCandidates::default(),
        };

    let names = snapshot
        .classes()
        .filter(|class| accept(snapshot, &parsed.object_type, class))
        .map(|class| class.name.clone())
        .collect();

    ConstraintCandidates {
        description: parsed.describe(),
        names,
    }
}
