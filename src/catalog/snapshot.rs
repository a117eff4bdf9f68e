//! Immutable catalog snapshot and the process-wide install barrier.
//!
//! Loading is two-phase. The *build* phase turns parsed dumps into a
//! [`CatalogSnapshot`]: order-preserving name indexes over both catalogs
//! plus the derived service index. The *serve* phase shares the snapshot by
//! reference with no write path; readers either hold `&CatalogSnapshot`
//! directly or go through [`install`]/[`shared`], a load-once barrier for
//! hosts that want a single process-wide snapshot.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use super::CatalogError;
use super::classes::ClassEntry;
use super::structs::StructEntry;

/// An immutable snapshot of both catalogs.
///
/// Element order is a load-time invariant: classes, structs, and members
/// are kept exactly in dump order, so first-match binding is stable for a
/// given dump.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    classes: IndexMap<SmolStr, ClassEntry>,
    structs: IndexMap<SmolStr, StructEntry>,
    /// Names of classes tagged as services, i.e. the service index.
    services: FxHashSet<SmolStr>,
}

impl CatalogSnapshot {
    /// Build a snapshot from parsed dumps.
    ///
    /// Names are unique keys within each catalog; a duplicated name keeps
    /// its first occurrence.
    pub fn build(classes: Vec<ClassEntry>, structs: Vec<StructEntry>) -> Self {
        let mut class_map: IndexMap<SmolStr, ClassEntry> = IndexMap::with_capacity(classes.len());
        let mut services = FxHashSet::default();
        for class in classes {
            if class.is_service() {
                services.insert(class.name.clone());
            }
            class_map.entry(class.name.clone()).or_insert(class);
        }

        let mut struct_map: IndexMap<SmolStr, StructEntry> = IndexMap::with_capacity(structs.len());
        for entry in structs {
            struct_map.entry(entry.name.clone()).or_insert(entry);
        }

        debug!(
            classes = class_map.len(),
            structs = struct_map.len(),
            services = services.len(),
            "catalog snapshot built"
        );

        Self {
            classes: class_map,
            structs: struct_map,
            services,
        }
    }

    /// Class catalog lookup by exact name.
    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    /// Struct catalog lookup by exact name.
    pub fn struct_entry(&self, name: &str) -> Option<&StructEntry> {
        self.structs.get(name)
    }

    /// Service index lookup: the class of a singleton service addressable
    /// by its own name.
    pub fn service(&self, name: &str) -> Option<&ClassEntry> {
        if self.services.contains(name) {
            self.classes.get(name)
        } else {
            None
        }
    }

    /// All classes, in dump order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    /// All structs, in dump order.
    pub fn structs(&self) -> impl Iterator<Item = &StructEntry> {
        self.structs.values()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn struct_count(&self) -> usize {
        self.structs.len()
    }

    /// Whether `name` is `ancestor` or inherits from it through superclass
    /// links. Unknown names are not subclasses of anything.
    pub fn is_subclass_of(&self, name: &str, ancestor: &str) -> bool {
        let mut current = Some(name);
        // malformed dumps could link superclasses in a cycle
        let mut hops = 0usize;
        while let Some(class_name) = current {
            if class_name == ancestor {
                return self.classes.contains_key(class_name);
            }
            hops += 1;
            if hops > self.classes.len() {
                return false;
            }
            current = self
                .class(class_name)
                .and_then(|c| c.superclass.as_deref());
        }
        false
    }
}

static SHARED: OnceLock<Arc<CatalogSnapshot>> = OnceLock::new();

/// Install the process-wide snapshot.
///
/// Catalogs are load-once: a second install is a broken precondition and
/// fails with [`CatalogError::AlreadyLoaded`].
pub fn install(snapshot: CatalogSnapshot) -> Result<Arc<CatalogSnapshot>, CatalogError> {
    let snapshot = Arc::new(snapshot);
    match SHARED.set(Arc::clone(&snapshot)) {
        Ok(()) => Ok(snapshot),
        Err(_) => Err(CatalogError::AlreadyLoaded),
    }
}

/// The installed process-wide snapshot.
///
/// Calling this before [`install`] is a programming-contract violation and
/// surfaces as [`CatalogError::NotLoaded`] rather than an empty result.
pub fn shared() -> Result<Arc<CatalogSnapshot>, CatalogError> {
    SHARED.get().cloned().ok_or(CatalogError::NotLoaded)
}
