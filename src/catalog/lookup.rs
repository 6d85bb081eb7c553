// src/catalog/lookup.rs

//! Entity lookup keys
//!
//! Every catalog operation addresses its target by primary key, by name
//! substring, or by both. The three shapes are a closed set:
//!
//! - `Id(7)` - exact primary key
//! - `Name("Sal")` - first entity whose name contains the fragment
//! - `IdOrName { id, name }` - the id wins whenever it resolves; the name is
//!   only consulted when it does not. The two are never intersected.
//!
//! "No key at all" is not representable; boundary code turns a pair of
//! optional parameters into `Option<Lookup>` with [`Lookup::from_parts`].

use serde::Deserialize;
use std::fmt;

/// How to find one entity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    Id(i64),
    Name(String),
    IdOrName { id: i64, name: String },
}

impl Lookup {
    pub fn id(id: i64) -> Self {
        Lookup::Id(id)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Lookup::Name(name.into())
    }

    pub fn id_or_name(id: i64, name: impl Into<String>) -> Self {
        Lookup::IdOrName {
            id,
            name: name.into(),
        }
    }

    /// Build a lookup from two optional keys
    ///
    /// Ids `<= 0` are never assigned and count as absent, as do empty names.
    /// Returns `None` when neither key is usable.
    pub fn from_parts(id: Option<i64>, name: Option<String>) -> Option<Self> {
        let id = id.filter(|id| *id > 0);
        let name = name.filter(|name| !name.is_empty());

        match (id, name) {
            (Some(id), Some(name)) => Some(Lookup::IdOrName { id, name }),
            (Some(id), None) => Some(Lookup::Id(id)),
            (None, Some(name)) => Some(Lookup::Name(name)),
            (None, None) => None,
        }
    }

    /// Primary key part, if any
    pub fn id_key(&self) -> Option<i64> {
        match self {
            Lookup::Id(id) | Lookup::IdOrName { id, .. } => Some(*id),
            Lookup::Name(_) => None,
        }
    }

    /// Name fragment part, if any
    pub fn name_key(&self) -> Option<&str> {
        match self {
            Lookup::Name(name) | Lookup::IdOrName { name, .. } => Some(name),
            Lookup::Id(_) => None,
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "id={}", id),
            Lookup::Name(name) => write!(f, "name~{:?}", name),
            Lookup::IdOrName { id, name } => write!(f, "id={} or name~{:?}", id, name),
        }
    }
}

/// Raw `id` / `name` pair as it arrives from a query string or the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl LookupParams {
    pub fn new(id: Option<i64>, name: Option<String>) -> Self {
        Self { id, name }
    }

    pub fn lookup(&self) -> Option<Lookup> {
        Lookup::from_parts(self.id, self.name.clone())
    }

    /// Whether a name parameter was supplied at all, even an empty one
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }
}
