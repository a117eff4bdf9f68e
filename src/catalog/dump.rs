//! Dump ingestion: parsing the class and struct catalog dumps.
//!
//! The class dump is a JSON object with a `Classes` array (PascalCase
//! fields); the struct dump is a bare JSON array (lowercase fields). The
//! host fetches and caches the files; this module is only the parse seam.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::classes::ClassEntry;
use super::snapshot::CatalogSnapshot;
use super::structs::StructEntry;
use super::CatalogError;

/// Wire shape of the class dump file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ClassDump {
    #[serde(default)]
    version: Option<u32>,
    classes: Vec<ClassEntry>,
}

/// Parse the class dump from JSON text.
pub fn parse_class_dump(json: &str) -> Result<Vec<ClassEntry>, CatalogError> {
    let dump: ClassDump = serde_json::from_str(json).map_err(|source| CatalogError::Dump {
        kind: "class",
        source,
    })?;
    info!(
        classes = dump.classes.len(),
        version = ?dump.version,
        "class dump parsed"
    );
    Ok(dump.classes)
}

/// Parse the struct dump from JSON text.
pub fn parse_struct_dump(json: &str) -> Result<Vec<StructEntry>, CatalogError> {
    let structs: Vec<StructEntry> =
        serde_json::from_str(json).map_err(|source| CatalogError::Dump {
            kind: "struct",
            source,
        })?;
    info!(structs = structs.len(), "struct dump parsed");
    Ok(structs)
}

/// Read and parse both dump files, then build a snapshot.
///
/// The two files are independent; they are read and parsed in parallel.
pub fn load_catalogs(
    class_path: &Path,
    struct_path: &Path,
) -> Result<CatalogSnapshot, CatalogError> {
    let (classes, structs) = rayon::join(
        || read_dump(class_path).and_then(|text| parse_class_dump(&text)),
        || read_dump(struct_path).and_then(|text| parse_struct_dump(&text)),
    );
    Ok(CatalogSnapshot::build(classes?, structs?))
}

fn read_dump(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
