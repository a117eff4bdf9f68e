//! Class catalog: object types and their members.
//!
//! Mirrors the class dump's wire format: PascalCase field names, members
//! polymorphic over a `MemberType` tag. Inheritance is flattened into each
//! class's member list by the dump producer; the `Superclass` marker is
//! kept only for subtype walks (constructor constraints).

use serde::Deserialize;
use smol_str::SmolStr;

/// Well-known metadata tags carried by classes and members.
pub mod tags {
    /// Singleton classes addressable globally by name.
    pub const SERVICE: &str = "Service";
    /// Classes scripts may not instantiate.
    pub const NOT_CREATABLE: &str = "NotCreatable";
    /// Members kept out of completion and inference.
    pub const HIDDEN: &str = "Hidden";
    /// Members not reachable from scripts at all.
    pub const NOT_SCRIPTABLE: &str = "NotScriptable";
    /// Members that still work but should sort last.
    pub const DEPRECATED: &str = "Deprecated";
}

/// Category of a member's declared type.
///
/// `Class` and `DataType` references continue a chain walk (they name a
/// class-catalog or struct-catalog entry); `Primitive` and `Enum` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TypeCategory {
    Class,
    DataType,
    Primitive,
    Enum,
}

/// A declared value type, resolved by name against the catalogs at
/// inference time, never eagerly linked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValueType {
    pub category: TypeCategory,
    pub name: SmolStr,
}

/// Script-visibility level guarding a member access direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SecurityLevel {
    #[default]
    None,
    PluginSecurity,
    LocalUserSecurity,
    RobloxScriptSecurity,
    NotAccessibleSecurity,
    /// Levels this build does not know about; treated as inaccessible.
    #[serde(other)]
    Unknown,
}

impl SecurityLevel {
    /// Whether ordinary script code can perform this access.
    pub fn is_script_accessible(self) -> bool {
        matches!(self, SecurityLevel::None)
    }
}

/// Read/write security levels of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemberSecurity {
    #[serde(default)]
    pub read: SecurityLevel,
    #[serde(default)]
    pub write: SecurityLevel,
}

/// A parameter of a function, event, or callback member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    pub name: SmolStr,
    #[serde(default, rename = "Type")]
    pub ty: Option<ValueType>,
    #[serde(default)]
    pub default: Option<String>,
}

/// A property member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyMember {
    pub name: SmolStr,
    pub value_type: ValueType,
    #[serde(default)]
    pub security: MemberSecurity,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
}

/// A function, event, or callback member.
///
/// Events and callbacks share this shape; only functions declare a return
/// type the resolver can descend into.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionMember {
    pub name: SmolStr,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: ValueType,
    #[serde(default)]
    pub security: MemberSecurity,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
}

/// An event (or callback) member: parameters, no return type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventMember {
    pub name: SmolStr,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub security: MemberSecurity,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
}

/// A class member, polymorphic over its declaration kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "MemberType")]
pub enum ClassMember {
    Property(PropertyMember),
    Function(FunctionMember),
    Event(EventMember),
    Callback(EventMember),
}

impl ClassMember {
    pub fn name(&self) -> &SmolStr {
        match self {
            ClassMember::Property(p) => &p.name,
            ClassMember::Function(f) => &f.name,
            ClassMember::Event(e) | ClassMember::Callback(e) => &e.name,
        }
    }

    pub fn security(&self) -> MemberSecurity {
        match self {
            ClassMember::Property(p) => p.security,
            ClassMember::Function(f) => f.security,
            ClassMember::Event(e) | ClassMember::Callback(e) => e.security,
        }
    }

    pub fn tags(&self) -> &[SmolStr] {
        match self {
            ClassMember::Property(p) => &p.tags,
            ClassMember::Function(f) => &f.tags,
            ClassMember::Event(e) | ClassMember::Callback(e) => &e.tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    pub fn is_deprecated(&self) -> bool {
        self.has_tag(tags::DEPRECATED)
    }

    /// Whether the member participates in inference and completion.
    ///
    /// Members behind a read security gate or tagged Hidden/NotScriptable
    /// are skipped by every lookup.
    pub fn is_inference_visible(&self) -> bool {
        self.security().read.is_script_accessible()
            && !self.has_tag(tags::HIDDEN)
            && !self.has_tag(tags::NOT_SCRIPTABLE)
    }
}

/// A class catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassEntry {
    pub name: SmolStr,
    #[serde(default)]
    pub superclass: Option<SmolStr>,
    #[serde(default)]
    pub tags: Vec<SmolStr>,
    #[serde(default)]
    pub members: Vec<ClassMember>,
}

impl ClassEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the class is a singleton service.
    pub fn is_service(&self) -> bool {
        self.has_tag(tags::SERVICE)
    }

    /// Whether scripts may instantiate the class.
    pub fn is_creatable(&self) -> bool {
        !self.has_tag(tags::NOT_CREATABLE) && !self.is_service()
    }

    /// First inference-visible member with the given name, in declaration
    /// order. Flattened inherited duplicates mean several members may share
    /// a name; the first declared one binds.
    pub fn member(&self, name: &str) -> Option<&ClassMember> {
        self.members
            .iter()
            .filter(|m| m.is_inference_visible())
            .find(|m| m.name() == name)
    }

    /// All inference-visible members sharing a name, in declaration order.
    pub fn members_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ClassMember> {
        self.members
            .iter()
            .filter(|m| m.is_inference_visible())
            .filter(move |m| m.name() == name)
    }
}
