//! Static unit registry: maps fully-qualified unit names to
//! no-argument constructors.
//!
//! Test-unit modules register themselves here at startup; collection
//! then instantiates everything under a namespace prefix. This is the
//! harness's single discovery mechanism.

use crate::error::{Error, Result};
use crate::types::TestUnit;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// No-argument constructor for one test unit.
pub type UnitCtor = fn() -> Result<Box<dyn TestUnit>>;

/// Registry of unit constructors, ordered by fully-qualified name.
#[derive(Default)]
pub struct UnitRegistry {
    entries: BTreeMap<String, UnitCtor>,
}

impl fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitRegistry")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under a fully-qualified name. Registering
    /// the same name twice replaces the earlier entry.
    pub fn register(&mut self, name: impl Into<String>, ctor: UnitCtor) {
        self.entries.insert(name.into(), ctor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, in lexical order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(|s| s.as_str()).collect()
    }

    /// Instantiate every unit registered under `namespace`, ordered by
    /// fully-qualified name.
    ///
    /// Fail-fast: a constructor error, or a constructed unit whose
    /// `name()` differs from its registration, aborts the whole
    /// collection with no partial result. An uninstantiable unit means
    /// a broken build, not something to skip past.
    pub fn collect(&self, namespace: &str) -> Result<Vec<Box<dyn TestUnit>>> {
        let mut units: Vec<Box<dyn TestUnit>> = Vec::new();
        for (name, ctor) in &self.entries {
            if !in_namespace(name, namespace) {
                continue;
            }
            let unit = ctor()
                .map_err(|e| Error::Discovery(format!("failed to construct {name}: {e}")))?;
            if unit.name() != name {
                return Err(Error::Discovery(format!(
                    "unit registered as {name} reports name {}",
                    unit.name()
                )));
            }
            debug!("Collected unit {}", name);
            units.push(unit);
        }
        Ok(units)
    }
}

/// True when `name` is a member of `namespace` (proper prefix on a
/// path-segment boundary).
fn in_namespace(name: &str, namespace: &str) -> bool {
    name.strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with("::"))
}
