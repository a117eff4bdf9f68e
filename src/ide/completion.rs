//! Completion data for chain positions.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::catalog::{
    CatalogSnapshot, ClassMember, Parameter, StructFunction, StructParameter, TypeCategory,
    aliases,
};
use crate::infer::{ResolvedType, constraint_candidates};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Property,
    Function,
    Event,
    Callback,
    Class,
    Global,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Property => 10, // Property
            CompletionKind::Function => 2,  // Method
            CompletionKind::Event => 23,    // Event
            CompletionKind::Callback => 3,  // Function
            CompletionKind::Class => 7,     // Class
            CompletionKind::Global => 6,    // Variable
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug)]
pub struct CompletionItem {
    /// The text shown in the list.
    pub label: SmolStr,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label), e.g. a type or signature.
    pub detail: Option<String>,
    /// Documentation (shown in popup).
    pub documentation: Option<String>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    pub fn new(label: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            sort_priority: 50,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Completions for the member position after a resolved chain element.
///
/// Class results list the class's inference-visible members; struct
/// results list properties and functions matching the element's static
/// context. Primitive and enum results have no members to offer.
pub fn member_completions(
    snapshot: &CatalogSnapshot,
    resolved: &ResolvedType,
) -> Vec<CompletionItem> {
    let mut items = match resolved.category {
        TypeCategory::Class => class_member_items(snapshot, &resolved.name),
        TypeCategory::DataType => {
            struct_member_items(snapshot, &resolved.name, resolved.is_static_context)
        }
        TypeCategory::Primitive | TypeCategory::Enum => Vec::new(),
    };
    items.sort_by_key(|item| item.sort_priority);
    items
}

/// Completions for the chain's first token: aliases, services, and struct
/// constructor namespaces.
pub fn global_completions(snapshot: &CatalogSnapshot) -> Vec<CompletionItem> {
    let mut items = Vec::new();

    for identifier in aliases::alias_identifiers() {
        let class = aliases::alias_class(identifier).unwrap_or_default();
        items.push(
            CompletionItem::new(identifier, CompletionKind::Global)
                .with_detail(format!(": {class}"))
                .with_priority(10),
        );
    }

    for class in snapshot.classes().filter(|c| c.is_service()) {
        items.push(
            CompletionItem::new(class.name.clone(), CompletionKind::Class)
                .with_detail("service".to_string())
                .with_priority(30),
        );
    }

    for entry in snapshot.structs() {
        items.push(
            CompletionItem::new(entry.name.clone(), CompletionKind::Class)
                .with_detail("type".to_string())
                .with_priority(40),
        );
    }

    items.sort_by_key(|item| item.sort_priority);
    items
}

/// Candidate class names for a constructor argument under a constraint.
pub fn constructor_completions(
    snapshot: &CatalogSnapshot,
    constraint: &str,
) -> Vec<CompletionItem> {
    let candidates = constraint_candidates(snapshot, constraint);
    candidates
        .names
        .into_iter()
        .map(|name| {
            CompletionItem::new(name, CompletionKind::Class)
                .with_documentation(candidates.description.clone())
        })
        .collect()
}

fn class_member_items(snapshot: &CatalogSnapshot, class_name: &str) -> Vec<CompletionItem> {
    let Some(class) = snapshot.class(class_name) else {
        return Vec::new();
    };

    // Flattened dumps may declare an inherited member twice; the first
    // declaration is the one the resolver binds, so it wins here too.
    let mut seen: FxHashSet<&SmolStr> = FxHashSet::default();
    let mut items = Vec::new();

    for member in class.members.iter().filter(|m| m.is_inference_visible()) {
        if !seen.insert(member.name()) {
            continue;
        }
        let item = match member {
            ClassMember::Property(p) => {
                CompletionItem::new(p.name.clone(), CompletionKind::Property)
                    .with_detail(format!(": {}", p.value_type.name))
            }
            ClassMember::Function(f) => {
                CompletionItem::new(f.name.clone(), CompletionKind::Function).with_detail(format!(
                    "({}): {}",
                    render_class_params(&f.parameters),
                    f.return_type.name
                ))
            }
            ClassMember::Event(e) => CompletionItem::new(e.name.clone(), CompletionKind::Event)
                .with_detail(format!("({})", render_class_params(&e.parameters))),
            ClassMember::Callback(c) => {
                CompletionItem::new(c.name.clone(), CompletionKind::Callback)
                    .with_detail(format!("({})", render_class_params(&c.parameters)))
            }
        };
        let priority = if member.is_deprecated() { 90 } else { 50 };
        items.push(item.with_priority(priority));
    }

    items
}

fn struct_member_items(
    snapshot: &CatalogSnapshot,
    struct_name: &str,
    static_context: bool,
) -> Vec<CompletionItem> {
    let Some(entry) = snapshot.struct_entry(struct_name) else {
        return Vec::new();
    };

    let mut items = Vec::new();

    for property in entry
        .properties
        .iter()
        .filter(|p| p.is_static == static_context)
    {
        items.push(
            CompletionItem::new(property.name.clone(), CompletionKind::Property)
                .with_detail(format!(": {}", property.type_name)),
        );
    }

    // One item per overload group; the first declared overload supplies
    // the displayed signature.
    let mut seen: FxHashSet<&SmolStr> = FxHashSet::default();
    for function in entry
        .functions
        .iter()
        .filter(|f| f.is_static == static_context)
    {
        if !seen.insert(&function.name) {
            continue;
        }
        items.push(
            CompletionItem::new(function.name.clone(), CompletionKind::Function)
                .with_detail(render_struct_signature(function)),
        );
    }

    items
}

fn render_class_params(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| match &p.ty {
            Some(ty) => format!("{}: {}", p.name, ty.name),
            None => p.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_struct_params(parameters: &[StructParameter]) -> String {
    parameters
        .iter()
        .map(|p| {
            let mut rendered = match &p.type_name {
                Some(type_name) => format!("{}: {}", p.name, type_name),
                None => p.name.to_string(),
            };
            if let Some(default) = &p.default {
                rendered.push_str(&format!(" = {default}"));
            }
            rendered
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_struct_signature(function: &StructFunction) -> String {
    let params = render_struct_params(&function.parameters);
    if function.returns.is_empty() {
        format!("({params})")
    } else {
        format!("({params}): {}", function.returns.join(", "))
    }
}
