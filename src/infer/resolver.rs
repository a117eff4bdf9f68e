//! The chain-resolution state machine.
//!
//! A linear walk over chain tokens. Each consumed token appends one
//! [`ResolvedType`] and moves the current [`Entity`] forward:
//!
//! - the FIRST token resolves, in priority order, against the alias table,
//!   the service index, the struct catalog (a struct referenced by its own
//!   type name opens a static context), and finally the document's local
//!   assignments;
//! - every SUBSEQUENT token is a member lookup on the current entity.
//!
//! The walk stops at the first token that resolves to nothing, when a
//! resolved type has no catalog entry to descend into, or when tokens run
//! out. Callers must treat a short sequence as "inference stopped early",
//! never as failure.

use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use crate::base::{DocumentView, Position, text_utils};
use crate::catalog::{
    CatalogSnapshot, ClassEntry, ClassMember, StructEntry, TypeCategory, aliases,
};
use crate::chain::{ChainToken, last_local_assignment, tokenize};

use super::entity::Entity;

/// Struct produced by event members: connecting to an event goes through
/// this struct-catalog entry.
pub const EVENT_STRUCT: &str = "RBXScriptSignal";

/// The struct/function pair that instantiates a class from a quoted name.
const CLASS_FACTORY: (&str, &str) = ("Instance", "new");

/// Assignment scanning recurses back into the resolver; adversarial
/// documents (`local a = b` above `local b = a`) must still terminate.
const MAX_SCAN_DEPTH: u8 = 8;

/// Inference output for one consumed chain token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// The raw token this element was derived from.
    pub source_token: SmolStr,
    pub category: TypeCategory,
    /// Catalog name of the resolved type.
    pub name: SmolStr,
    /// Whether the next member lookup is in a static (constructor
    /// namespace) context rather than an instance context.
    pub is_static_context: bool,
}

/// One resolved token plus where the walk goes next.
struct Step<'a> {
    result: ResolvedType,
    next: Option<Entity<'a>>,
}

/// Infer the type chain for the text before `position` in `document`.
///
/// Extracts the chain expression ending at the cursor and resolves it; see
/// [`infer_chain`].
pub fn infer_at(
    snapshot: &CatalogSnapshot,
    document: &str,
    position: Position,
) -> Vec<ResolvedType> {
    let view = DocumentView::new(document);
    let chain = text_utils::chain_at_cursor(view.line_prefix(position));
    infer_chain(snapshot, view.text_before(position), chain)
}

/// Infer the most specific known type of every step of `chain_text`.
///
/// `document_prefix` is all text strictly before the reference position;
/// it is consulted only when the first token matches neither the alias
/// table, the service index, nor a struct name. The result has one element
/// per resolved token, in chain order; an empty result means the first
/// token resolved to nothing.
pub fn infer_chain(
    snapshot: &CatalogSnapshot,
    document_prefix: &str,
    chain_text: &str,
) -> Vec<ResolvedType> {
    infer_with_depth(snapshot, document_prefix, chain_text, 0)
}

fn infer_with_depth(
    snapshot: &CatalogSnapshot,
    document_prefix: &str,
    chain_text: &str,
    depth: u8,
) -> Vec<ResolvedType> {
    let tokens = tokenize(chain_text);
    debug!(chain = chain_text, tokens = tokens.len(), depth, "resolving chain");

    let mut resolved: Vec<ResolvedType> = Vec::with_capacity(tokens.len());
    let mut entity: Option<Entity<'_>> = None;

    for (index, token) in tokens.iter().enumerate() {
        let step = if index == 0 {
            resolve_first(snapshot, document_prefix, token, depth)
        } else {
            match entity {
                Some(Entity::Class(class)) => resolve_class_member(snapshot, class, token),
                Some(Entity::Struct(entry)) => {
                    // context comes from the previously pushed element
                    let static_context = resolved
                        .last()
                        .map(|r| r.is_static_context)
                        .unwrap_or(false);
                    resolve_struct_member(snapshot, entry, token, static_context)
                }
                None => None,
            }
        };

        match step {
            Some(Step { result, next }) => {
                trace!(
                    token = %token.text,
                    category = ?result.category,
                    name = %result.name,
                    "token resolved"
                );
                resolved.push(result);
                entity = next;
            }
            None => {
                trace!(token = %token.text, "token did not resolve; stopping");
                break;
            }
        }
    }

    resolved
}

/// First-token resolution, in priority order: alias table, service index,
/// struct catalog, assignment scan.
fn resolve_first<'a>(
    snapshot: &'a CatalogSnapshot,
    document_prefix: &str,
    token: &ChainToken,
    depth: u8,
) -> Option<Step<'a>> {
    let identifier = token.identifier()?;

    // The alias table always wins over a like-named service.
    if let Some(class_name) = aliases::alias_class(identifier) {
        return Some(Step {
            result: ResolvedType {
                source_token: token.text.clone(),
                category: TypeCategory::Class,
                name: class_name.into(),
                is_static_context: false,
            },
            next: snapshot.class(class_name).map(Entity::Class),
        });
    }

    if let Some(class) = snapshot.service(identifier) {
        return Some(Step {
            result: ResolvedType {
                source_token: token.text.clone(),
                category: TypeCategory::Class,
                name: class.name.clone(),
                is_static_context: false,
            },
            next: Some(Entity::Class(class)),
        });
    }

    // A struct referenced by its own type name is a constructor namespace:
    // member lookups on it happen in a static context.
    if let Some(entry) = snapshot.struct_entry(identifier) {
        return Some(Step {
            result: ResolvedType {
                source_token: token.text.clone(),
                category: TypeCategory::DataType,
                name: entry.name.clone(),
                is_static_context: true,
            },
            next: Some(Entity::Struct(entry)),
        });
    }

    resolve_from_assignment(snapshot, document_prefix, token, identifier, depth)
}

/// First-token fallback: follow the most recent `local <id> = <rhs>` line
/// above the reference point and adopt the last element of the rhs chain's
/// resolution as this identifier's type.
fn resolve_from_assignment<'a>(
    snapshot: &'a CatalogSnapshot,
    document_prefix: &str,
    token: &ChainToken,
    identifier: &str,
    depth: u8,
) -> Option<Step<'a>> {
    if depth >= MAX_SCAN_DEPTH {
        warn!(identifier, "assignment scan recursion limit reached");
        return None;
    }

    let found = last_local_assignment(document_prefix, identifier)?;
    let rhs_chain = text_utils::chain_before_cursor(found.rhs);
    trace!(identifier, rhs = rhs_chain, "following local assignment");

    // Recurse with the prefix truncated to the assignment line, so a
    // self-referential rhs cannot re-find the same line.
    let inner = infer_with_depth(
        snapshot,
        &document_prefix[..found.line_start],
        rhs_chain,
        depth + 1,
    );
    let last = inner.into_iter().last()?;
    let next = entity_for(snapshot, last.category, &last.name);
    Some(Step {
        result: ResolvedType {
            source_token: token.text.clone(),
            ..last
        },
        next,
    })
}

/// Member lookup on a class: property, function, or event, first declared
/// visible match binds.
fn resolve_class_member<'a>(
    snapshot: &'a CatalogSnapshot,
    class: &ClassEntry,
    token: &ChainToken,
) -> Option<Step<'a>> {
    let name = token.identifier()?;
    let member = class.member(name)?;

    let (category, type_name): (TypeCategory, SmolStr) = match member {
        ClassMember::Property(p) => (p.value_type.category, p.value_type.name.clone()),
        ClassMember::Function(f) => (f.return_type.category, f.return_type.name.clone()),
        // Connecting to an event yields the canonical signal struct.
        ClassMember::Event(_) => (TypeCategory::DataType, EVENT_STRUCT.into()),
        // No descent rule exists for callbacks; the walk stops here.
        ClassMember::Callback(_) => return None,
    };

    let next = entity_for(snapshot, category, &type_name);
    Some(Step {
        result: ResolvedType {
            source_token: token.text.clone(),
            category,
            name: type_name,
            is_static_context: false,
        },
        next,
    })
}

/// Member lookup on a struct: properties first, then functions, both
/// filtered by the static context inherited from the previous element.
fn resolve_struct_member<'a>(
    snapshot: &'a CatalogSnapshot,
    entry: &StructEntry,
    token: &ChainToken,
    static_context: bool,
) -> Option<Step<'a>> {
    let name = token.identifier()?;

    if let Some(property) = entry.property(name, static_context) {
        let category = classify_type_name(snapshot, &property.type_name);
        return Some(Step {
            result: ResolvedType {
                source_token: token.text.clone(),
                category,
                name: property.type_name.clone(),
                is_static_context: false,
            },
            next: entity_for(snapshot, category, &property.type_name),
        });
    }

    let function = entry.function(name, static_context)?;

    // `Instance.new("ClassName")` with a known quoted class resolves
    // straight to that class instead of the declared return type.
    if (entry.name.as_str(), function.name.as_str()) == CLASS_FACTORY {
        if let Some(class) = quoted_class_argument(snapshot, token) {
            trace!(class = %class.name, "class factory call resolved by literal");
            return Some(Step {
                result: ResolvedType {
                    source_token: token.text.clone(),
                    category: TypeCategory::Class,
                    name: class.name.clone(),
                    is_static_context: false,
                },
                next: Some(Entity::Class(class)),
            });
        }
    }

    let return_name = function.primary_return()?;
    let category = classify_type_name(snapshot, return_name);
    Some(Step {
        result: ResolvedType {
            source_token: token.text.clone(),
            category,
            name: return_name.clone(),
            is_static_context: false,
        },
        next: entity_for(snapshot, category, return_name),
    })
}

/// Classify a struct-catalog type name: classes shadow structs, anything
/// unknown to both catalogs is a primitive.
fn classify_type_name(snapshot: &CatalogSnapshot, type_name: &str) -> TypeCategory {
    if snapshot.class(type_name).is_some() {
        TypeCategory::Class
    } else if snapshot.struct_entry(type_name).is_some() {
        TypeCategory::DataType
    } else {
        TypeCategory::Primitive
    }
}

/// The catalog entry backing a resolved category/name, if the walk can
/// continue through it. Primitives and enums are terminal.
fn entity_for<'a>(
    snapshot: &'a CatalogSnapshot,
    category: TypeCategory,
    name: &str,
) -> Option<Entity<'a>> {
    match category {
        TypeCategory::Class => snapshot.class(name).map(Entity::Class),
        TypeCategory::DataType => snapshot.struct_entry(name).map(Entity::Struct),
        TypeCategory::Primitive | TypeCategory::Enum => None,
    }
}

/// The class named by a quoted first argument of a call token.
fn quoted_class_argument<'a>(
    snapshot: &'a CatalogSnapshot,
    token: &ChainToken,
) -> Option<&'a ClassEntry> {
    let arguments = token.call_arguments()?;
    let first = arguments.split(',').next()?.trim();
    let quote = first.chars().next().filter(|&c| c == '"' || c == '\'')?;
    let name = first.strip_prefix(quote)?.strip_suffix(quote)?;
    snapshot.class(name)
}
