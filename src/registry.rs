// gldispatch/src/registry.rs
//
//! The function registry: a sorted, read-only table from every known function name (aliases
//! included) to the dispatch slot it shares and the paths that make it available.

use crate::info::{GLApi, GLVersion};
use crate::slots::SlotId;

/// One way a function can become available to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Core in `api` as of `version`.
    Version { api: GLApi, version: GLVersion },
    /// Provided by the named extension.
    Extension(&'static str),
}

impl Requirement {
    #[inline]
    pub const fn version(api: GLApi, version: GLVersion) -> Requirement {
        Requirement::Version { api, version }
    }

    #[inline]
    pub const fn extension(name: &'static str) -> Requirement {
        Requirement::Extension(name)
    }
}

/// A single name in the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub slot: SlotId,
    /// Tried in order. An empty list means the function is part of every context.
    pub requirements: Vec<Requirement>,
}

impl FunctionSpec {
    pub fn new(name: &'static str, slot: SlotId, requirements: Vec<Requirement>) -> FunctionSpec {
        FunctionSpec { name, slot, requirements }
    }

    /// Whether the function is reachable without any extension on some API version.
    pub fn is_core(&self) -> bool {
        self.requirements.is_empty() ||
            self.requirements.iter().any(|requirement| {
                matches!(*requirement, Requirement::Version { .. })
            })
    }
}

/// The function registry.
///
/// Entries are kept sorted by name so that [`FunctionRegistry::lookup`] is a binary search.
pub struct FunctionRegistry {
    entries: Vec<FunctionSpec>,
    slot_count: usize,
}

impl FunctionRegistry {
    /// Builds a registry from an unordered list of entries.
    ///
    /// Panics if a name appears twice; the table is static configuration, so that is a bug in
    /// the table rather than a runtime condition.
    pub fn new(mut entries: Vec<FunctionSpec>) -> FunctionRegistry {
        entries.sort_by(|a, b| a.name.cmp(b.name));
        for pair in entries.windows(2) {
            assert_ne!(pair[0].name, pair[1].name, "duplicate function registry entry");
        }

        let slot_count = entries.iter().map(|entry| entry.slot + 1).max().unwrap_or(0);
        FunctionRegistry { entries, slot_count }
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&FunctionSpec> {
        self.entries
            .binary_search_by(|entry| entry.name.cmp(name))
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Every name bound to `slot`, in sorted order.
    pub fn aliases(&self, slot: SlotId) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.slot == slot)
            .map(|entry| entry.name)
    }

    /// The number of slots a dispatcher needs for this registry.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.entries.iter()
    }
}
