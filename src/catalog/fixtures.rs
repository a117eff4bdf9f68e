//! Shared fixture catalogs for unit tests.
//!
//! Builds one snapshot from small in-crate dumps and caches it for every
//! test module, so individual tests only pay the parse cost once.

use std::sync::LazyLock;

use super::dump::{parse_class_dump, parse_struct_dump};
use super::snapshot::CatalogSnapshot;

const CLASS_DUMP: &str = r#"{
    "Version": 1,
    "Classes": [
        {
            "Name": "Instance",
            "Tags": ["NotCreatable"],
            "Members": [
                { "MemberType": "Property", "Name": "Name", "ValueType": { "Category": "Primitive", "Name": "string" } },
                { "MemberType": "Property", "Name": "Parent", "ValueType": { "Category": "Class", "Name": "Instance" } },
                { "MemberType": "Property", "Name": "ClassName", "ValueType": { "Category": "Primitive", "Name": "string" } },
                {
                    "MemberType": "Function",
                    "Name": "FindFirstChild",
                    "Parameters": [{ "Name": "name", "Type": { "Category": "Primitive", "Name": "string" } }],
                    "ReturnType": { "Category": "Class", "Name": "Instance" }
                },
                { "MemberType": "Event", "Name": "ChildAdded", "Parameters": [{ "Name": "child", "Type": { "Category": "Class", "Name": "Instance" } }] }
            ]
        },
        { "Name": "ServiceProvider", "Superclass": "Instance", "Tags": ["NotCreatable"] },
        {
            "Name": "DataModel",
            "Superclass": "ServiceProvider",
            "Tags": ["NotCreatable"],
            "Members": [
                { "MemberType": "Property", "Name": "Workspace", "ValueType": { "Category": "Class", "Name": "Workspace" } },
                {
                    "MemberType": "Function",
                    "Name": "GetService",
                    "Parameters": [{ "Name": "className", "Type": { "Category": "Primitive", "Name": "string" } }],
                    "ReturnType": { "Category": "Class", "Name": "Instance" }
                }
            ]
        },
        {
            "Name": "Workspace",
            "Superclass": "Instance",
            "Tags": ["Service"],
            "Members": [
                { "MemberType": "Property", "Name": "Gravity", "ValueType": { "Category": "Primitive", "Name": "number" } },
                { "MemberType": "Property", "Name": "CurrentCamera", "ValueType": { "Category": "Class", "Name": "Camera" } },
                { "MemberType": "Property", "Name": "Name", "ValueType": { "Category": "Primitive", "Name": "string" } }
            ]
        },
        {
            "Name": "Camera",
            "Superclass": "Instance",
            "Members": [
                { "MemberType": "Property", "Name": "FieldOfView", "ValueType": { "Category": "Primitive", "Name": "number" } },
                { "MemberType": "Property", "Name": "CFrame", "ValueType": { "Category": "DataType", "Name": "CFrame" } }
            ]
        },
        {
            "Name": "Lighting",
            "Superclass": "Instance",
            "Tags": ["Service"],
            "Members": [
                { "MemberType": "Property", "Name": "Ambient", "ValueType": { "Category": "DataType", "Name": "Color3" } },
                { "MemberType": "Property", "Name": "ClockTime", "ValueType": { "Category": "Primitive", "Name": "number" } },
                {
                    "MemberType": "Function",
                    "Name": "GetMinutesAfterMidnight",
                    "Parameters": [],
                    "ReturnType": { "Category": "Primitive", "Name": "number" }
                },
                { "MemberType": "Event", "Name": "LightingChanged", "Parameters": [{ "Name": "skyboxChanged", "Type": { "Category": "Primitive", "Name": "boolean" } }] },
                {
                    "MemberType": "Property",
                    "Name": "InternalState",
                    "ValueType": { "Category": "Primitive", "Name": "number" },
                    "Security": { "Read": "RobloxScriptSecurity", "Write": "RobloxScriptSecurity" }
                }
            ]
        },
        {
            "Name": "BasePart",
            "Superclass": "Instance",
            "Tags": ["NotCreatable"],
            "Members": [
                { "MemberType": "Property", "Name": "Anchored", "ValueType": { "Category": "Primitive", "Name": "boolean" } },
                { "MemberType": "Property", "Name": "Position", "ValueType": { "Category": "DataType", "Name": "Vector3" } }
            ]
        },
        {
            "Name": "Part",
            "Superclass": "BasePart",
            "Members": [
                { "MemberType": "Property", "Name": "Name", "ValueType": { "Category": "Primitive", "Name": "string" } },
                { "MemberType": "Property", "Name": "Parent", "ValueType": { "Category": "Class", "Name": "Instance" } },
                { "MemberType": "Property", "Name": "Anchored", "ValueType": { "Category": "Primitive", "Name": "boolean" } },
                { "MemberType": "Property", "Name": "Anchored", "ValueType": { "Category": "Primitive", "Name": "boolean" }, "Tags": ["Deprecated"] },
                { "MemberType": "Property", "Name": "Position", "ValueType": { "Category": "DataType", "Name": "Vector3" } },
                { "MemberType": "Property", "Name": "Material", "ValueType": { "Category": "Enum", "Name": "Material" } },
                { "MemberType": "Event", "Name": "Touched", "Parameters": [{ "Name": "otherPart", "Type": { "Category": "Class", "Name": "BasePart" } }] },
                { "MemberType": "Callback", "Name": "CustomRender", "Parameters": [] }
            ]
        },
        { "Name": "Script", "Superclass": "Instance", "Members": [
            { "MemberType": "Property", "Name": "Enabled", "ValueType": { "Category": "Primitive", "Name": "boolean" } }
        ] },
        { "Name": "Folder", "Superclass": "Instance" }
    ]
}"#;

const STRUCT_DUMP: &str = r#"[
    {
        "name": "Color3",
        "properties": [
            { "name": "R", "type": "number" },
            { "name": "G", "type": "number" },
            { "name": "B", "type": "number" }
        ],
        "functions": [
            {
                "name": "new",
                "static": true,
                "parameters": [
                    { "name": "r", "type": "number", "default": "0" },
                    { "name": "g", "type": "number", "default": "0" },
                    { "name": "b", "type": "number", "default": "0" }
                ],
                "returns": ["Color3"]
            },
            {
                "name": "fromRGB",
                "static": true,
                "parameters": [
                    { "name": "r", "type": "number" },
                    { "name": "g", "type": "number" },
                    { "name": "b", "type": "number" }
                ],
                "returns": ["Color3"]
            },
            {
                "name": "Lerp",
                "parameters": [
                    { "name": "goal", "type": "Color3" },
                    { "name": "alpha", "type": "number" }
                ],
                "returns": ["Color3"]
            },
            { "name": "ToHSV", "parameters": [], "returns": ["number", "number", "number"] }
        ]
    },
    {
        "name": "Vector3",
        "properties": [
            { "name": "zero", "type": "Vector3", "static": true },
            { "name": "one", "type": "Vector3", "static": true },
            { "name": "X", "type": "number" },
            { "name": "Y", "type": "number" },
            { "name": "Z", "type": "number" },
            { "name": "Magnitude", "type": "number" }
        ],
        "functions": [
            {
                "name": "new",
                "static": true,
                "parameters": [
                    { "name": "x", "type": "number", "default": "0" },
                    { "name": "y", "type": "number", "default": "0" },
                    { "name": "z", "type": "number", "default": "0" }
                ],
                "returns": ["Vector3"]
            },
            {
                "name": "Lerp",
                "parameters": [
                    { "name": "goal", "type": "Vector3" },
                    { "name": "alpha", "type": "number" }
                ],
                "returns": ["Vector3"]
            },
            { "name": "Dot", "parameters": [{ "name": "other", "type": "Vector3" }], "returns": ["number"] }
        ]
    },
    {
        "name": "CFrame",
        "properties": [
            { "name": "identity", "type": "CFrame", "static": true },
            { "name": "Position", "type": "Vector3" },
            { "name": "LookVector", "type": "Vector3" }
        ],
        "functions": [
            {
                "name": "new",
                "static": true,
                "parameters": [
                    { "name": "x", "type": "number", "default": "0" },
                    { "name": "y", "type": "number", "default": "0" },
                    { "name": "z", "type": "number", "default": "0" }
                ],
                "returns": ["CFrame"]
            }
        ]
    },
    {
        "name": "Instance",
        "functions": [
            {
                "name": "new",
                "static": true,
                "parameters": [
                    { "name": "className", "type": "string", "constraint": "Instance:isCreatable" }
                ],
                "returns": ["Instance"]
            },
            {
                "name": "new",
                "static": true,
                "parameters": [
                    { "name": "className", "type": "string", "constraint": "Instance:isCreatable" },
                    { "name": "parent", "type": "Instance" }
                ],
                "returns": ["Instance"]
            }
        ]
    },
    {
        "name": "RBXScriptSignal",
        "functions": [
            {
                "name": "Connect",
                "parameters": [{ "name": "callback", "type": "function" }],
                "returns": ["RBXScriptConnection"]
            },
            { "name": "Wait", "parameters": [], "returns": [] }
        ]
    },
    {
        "name": "RBXScriptConnection",
        "properties": [{ "name": "Connected", "type": "boolean" }],
        "functions": [{ "name": "Disconnect", "parameters": [], "returns": [] }]
    }
]"#;

static SNAPSHOT: LazyLock<CatalogSnapshot> = LazyLock::new(|| {
    let classes = parse_class_dump(CLASS_DUMP).expect("fixture class dump parses");
    let structs = parse_struct_dump(STRUCT_DUMP).expect("fixture struct dump parses");
    CatalogSnapshot::build(classes, structs)
});

/// The shared fixture snapshot.
pub(crate) fn snapshot() -> &'static CatalogSnapshot {
    &SNAPSHOT
}
