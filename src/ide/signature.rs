//! Signature-help data for call positions.
//!
//! Binds to the first declared overload, per the resolver's tie-break
//! rule, and reports the overload-group size so callers can render
//! "+N overloads" themselves.

use crate::catalog::{CatalogSnapshot, ClassMember, TypeCategory};
use crate::infer::{ParamConstraint, ResolvedType};

/// One parameter of a signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInfo {
    /// Rendered parameter label, e.g. `x: number = 0`.
    pub label: String,
    /// Extra documentation, e.g. what a constrained argument accepts.
    pub documentation: Option<String>,
}

/// Signature data for one call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Full rendered signature.
    pub label: String,
    pub parameters: Vec<ParameterInfo>,
    /// Number of declarations sharing this name; always at least 1.
    pub overload_count: usize,
}

/// Signature data for calling `member_name` on a resolved chain element.
///
/// Returns `None` when the element is not a class or struct, or when the
/// member does not exist or is not callable, matching the resolver's
/// silent-stop policy.
pub fn signature_help(
    snapshot: &CatalogSnapshot,
    prev: &ResolvedType,
    member_name: &str,
) -> Option<SignatureInfo> {
    match prev.category {
        TypeCategory::Class => class_signature(snapshot, &prev.name, member_name),
        TypeCategory::DataType => {
            struct_signature(snapshot, &prev.name, member_name, prev.is_static_context)
        }
        TypeCategory::Primitive | TypeCategory::Enum => None,
    }
}

fn class_signature(
    snapshot: &CatalogSnapshot,
    class_name: &str,
    member_name: &str,
) -> Option<SignatureInfo> {
    let class = snapshot.class(class_name)?;
    let member = class.member(member_name)?;
    let ClassMember::Function(function) = member else {
        return None;
    };

    let parameters: Vec<ParameterInfo> = function
        .parameters
        .iter()
        .map(|p| ParameterInfo {
            label: match &p.ty {
                Some(ty) => format!("{}: {}", p.name, ty.name),
                None => p.name.to_string(),
            },
            documentation: None,
        })
        .collect();

    let label = format!(
        "{}:{}({}) → {}",
        class.name,
        function.name,
        join_labels(&parameters),
        function.return_type.name
    );

    Some(SignatureInfo {
        label,
        parameters,
        overload_count: class.members_named(member_name).count(),
    })
}

fn struct_signature(
    snapshot: &CatalogSnapshot,
    struct_name: &str,
    member_name: &str,
    static_context: bool,
) -> Option<SignatureInfo> {
    let entry = snapshot.struct_entry(struct_name)?;
    let function = entry.function(member_name, static_context)?;

    let parameters: Vec<ParameterInfo> = function
        .parameters
        .iter()
        .map(|p| {
            let mut label = match &p.type_name {
                Some(type_name) => format!("{}: {}", p.name, type_name),
                None => p.name.to_string(),
            };
            if let Some(default) = &p.default {
                label.push_str(&format!(" = {default}"));
            }
            ParameterInfo {
                label,
                documentation: p
                    .constraint
                    .as_deref()
                    .and_then(ParamConstraint::parse)
                    .map(|c| c.describe())
                    .filter(|d| !d.is_empty()),
            }
        })
        .collect();

    let accessor = if function.is_static { "." } else { ":" };
    let mut label = format!(
        "{}{}{}({})",
        entry.name,
        accessor,
        function.name,
        join_labels(&parameters)
    );
    if !function.returns.is_empty() {
        label.push_str(&format!(" → {}", function.returns.join(", ")));
    }

    Some(SignatureInfo {
        label,
        parameters,
        overload_count: entry.overloads(member_name, static_context).count(),
    })
}

fn join_labels(parameters: &[ParameterInfo]) -> String {
    parameters
        .iter()
        .map(|p| p.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::infer::infer_chain;

    fn resolved_last(chain: &str) -> ResolvedType {
        infer_chain(fixtures::snapshot(), "", chain)
            .into_iter()
            .last()
            .expect("chain resolves")
    }

    #[test]
    fn test_struct_constructor_signature_with_overloads() {
        let info = signature_help(fixtures::snapshot(), &resolved_last("Instance"), "new").unwrap();
        assert_eq!(info.overload_count, 2);
        // First declared overload binds.
        assert_eq!(info.parameters.len(), 1);
        assert_eq!(info.parameters[0].label, "className: string");
        assert_eq!(
            info.parameters[0].documentation.as_deref(),
            Some("Instance subtypes creatable from scripts")
        );
        assert_eq!(info.label, "Instance.new(className: string) → Instance");
    }

    #[test]
    fn test_struct_instance_method_signature() {
        let info = signature_help(
            fixtures::snapshot(),
            &resolved_last("Vector3.new()"),
            "Lerp",
        )
        .unwrap();
        assert_eq!(info.overload_count, 1);
        assert_eq!(
            info.label,
            "Vector3:Lerp(goal: Vector3, alpha: number) → Vector3"
        );
    }

    #[test]
    fn test_static_function_defaults_rendered() {
        let info =
            signature_help(fixtures::snapshot(), &resolved_last("Vector3"), "new").unwrap();
        assert_eq!(info.parameters[0].label, "x: number = 0");
        assert!(info.label.starts_with("Vector3.new("));
    }

    #[test]
    fn test_class_function_signature() {
        let info = signature_help(fixtures::snapshot(), &resolved_last("game"), "GetService")
            .unwrap();
        assert_eq!(info.label, "DataModel:GetService(className: string) → Instance");
        assert_eq!(info.overload_count, 1);
    }

    #[test]
    fn test_non_callable_members_have_no_signature() {
        let snapshot = fixtures::snapshot();
        assert!(signature_help(snapshot, &resolved_last("Lighting"), "Ambient").is_none());
        assert!(signature_help(snapshot, &resolved_last("Lighting"), "Missing").is_none());
        assert!(signature_help(snapshot, &resolved_last("Lighting.ClockTime"), "anything").is_none());
    }

    #[test]
    fn test_static_context_gates_signatures() {
        let snapshot = fixtures::snapshot();
        // `new` is static: not callable on an instance element.
        assert!(signature_help(snapshot, &resolved_last("Vector3.new()"), "new").is_none());
        // `Lerp` is instance: not callable on the namespace.
        assert!(signature_help(snapshot, &resolved_last("Vector3"), "Lerp").is_none());
    }
}
