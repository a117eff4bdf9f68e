//! Struct catalog: value types with static and instance members.
//!
//! Mirrors the struct dump's wire format: lowercase field names, a plain
//! array at the root. Unlike classes, several functions in one struct may
//! share a name (constructor/operator overloads); lookups bind the first
//! declared match and expose the whole group for display.

use serde::Deserialize;
use smol_str::SmolStr;

/// A struct property. `static` properties live on the type name itself
/// (e.g. a constant on the constructor namespace), instance properties on
/// produced values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructProperty {
    pub name: SmolStr,
    #[serde(rename = "type")]
    pub type_name: SmolStr,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// A parameter of a struct function.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructParameter {
    pub name: SmolStr,
    #[serde(default, rename = "type")]
    pub type_name: Option<SmolStr>,
    #[serde(default)]
    pub default: Option<SmolStr>,
    /// `ObjectType:ConstraintKind` restriction on accepted arguments,
    /// used to drive argument-position completion.
    #[serde(default)]
    pub constraint: Option<SmolStr>,
}

/// A struct function. Multiple declared returns are allowed; inference
/// only ever descends into the first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructFunction {
    pub name: SmolStr,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<StructParameter>,
    #[serde(default)]
    pub returns: Vec<SmolStr>,
}

impl StructFunction {
    /// The return type inference descends into, if any is declared.
    pub fn primary_return(&self) -> Option<&SmolStr> {
        self.returns.first()
    }
}

/// A struct catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StructEntry {
    pub name: SmolStr,
    #[serde(default)]
    pub properties: Vec<StructProperty>,
    #[serde(default)]
    pub functions: Vec<StructFunction>,
}

impl StructEntry {
    /// First property matching name and static context, declaration order.
    pub fn property(&self, name: &str, static_context: bool) -> Option<&StructProperty> {
        self.properties
            .iter()
            .find(|p| p.name == name && p.is_static == static_context)
    }

    /// First function matching name and static context. Overload groups
    /// bind to the first declared entry; no argument-based disambiguation.
    pub fn function(&self, name: &str, static_context: bool) -> Option<&StructFunction> {
        self.functions
            .iter()
            .find(|f| f.name == name && f.is_static == static_context)
    }

    /// Every overload sharing a name in the given context, declaration
    /// order. Callers use the group size for "+N overloads" display.
    pub fn overloads<'a>(
        &'a self,
        name: &'a str,
        static_context: bool,
    ) -> impl Iterator<Item = &'a StructFunction> {
        self.functions
            .iter()
            .filter(move |f| f.name == name && f.is_static == static_context)
    }
}
