use std::collections::HashMap;

use log::trace;

use crate::interpreter::value::core::Value;

/// Handle of a scope record inside a [`ScopeArena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// Position of the record in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Default)]
struct ScopeRecord {
    parent:    Option<ScopeId>,
    variables: HashMap<String, Value>,
    live:      bool,
}

/// Storage for every scope of a session.
///
/// Scopes form parent chains through [`ScopeId`] handles, never through
/// references, so there are no ownership cycles. Released records are
/// cleared and handed out again by later allocations.
#[derive(Debug, Default)]
pub struct ScopeArena {
    records: Vec<ScopeRecord>,
    free:    Vec<ScopeId>,
}

impl ScopeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an empty scope whose lookups fall back to `parent`.
    ///
    /// # Example
    /// ```
    /// use numora::interpreter::{scope::ScopeArena, value::core::Value};
    ///
    /// let mut arena = ScopeArena::new();
    /// let outer = arena.allocate(None);
    /// let inner = arena.allocate(Some(outer));
    ///
    /// arena.bind(outer, "x", Value::from(1.0));
    /// assert_eq!(arena.lookup(inner, "x"), Some(&Value::from(1.0)));
    ///
    /// arena.bind(inner, "x", Value::from(2.0));
    /// assert_eq!(arena.lookup(inner, "x"), Some(&Value::from(2.0)));
    /// assert_eq!(arena.lookup(outer, "x"), Some(&Value::from(1.0)));
    /// ```
    pub fn allocate(&mut self, parent: Option<ScopeId>) -> ScopeId {
        if let Some(id) = self.free.pop() {
            let record = &mut self.records[id.0];
            record.parent = parent;
            record.live = true;
            trace!("reusing scope {} (parent {parent:?})", id.0);
            return id;
        }

        let id = ScopeId(self.records.len());
        self.records.push(ScopeRecord { parent,
                                        variables: HashMap::new(),
                                        live: true });
        trace!("allocated scope {} (parent {parent:?})", id.0);
        id
    }

    /// Drops every binding of `id` and makes the record reusable.
    ///
    /// Releasing a scope that is not live does nothing.
    pub fn release(&mut self, id: ScopeId) {
        let Some(record) = self.records.get_mut(id.0) else {
            return;
        };
        if !record.live {
            return;
        }

        record.variables.clear();
        record.parent = None;
        record.live = false;
        self.free.push(id);
        trace!("released scope {}", id.0);
    }

    /// Finds the nearest binding of `name`, starting at `scope` and walking
    /// outward through the parents.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let record = self.records.get(id.0)?;
            if let Some(value) = record.variables.get(name) {
                return Some(value);
            }
            current = record.parent;
        }
        None
    }

    /// Binds `name` in `scope` itself, shadowing any outer binding.
    pub fn bind(&mut self, scope: ScopeId, name: &str, value: Value) {
        if let Some(record) = self.records.get_mut(scope.0) {
            trace!("scope {}: {name} = {value}", scope.0);
            record.variables.insert(name.to_string(), value);
        }
    }

    /// The binding of `name` in `scope` only, ignoring parents.
    #[must_use]
    pub fn get_local(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        self.records.get(scope.0)?.variables.get(name)
    }

    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.records.get(scope.0)?.parent
    }

    /// Number of scopes currently allocated.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.records.iter().filter(|record| record.live).count()
    }
}
