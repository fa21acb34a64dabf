//! Prop Entry Store
//!
//! An append-only log of named props for one request, with checkpoints so a
//! render attempt can be thrown away and replaced by another one (typically an
//! error page after a prop failed).
//!
//! # Checkpoints
//!
//! Every entry is tagged with the store's dirty flag at the time it was
//! appended. The first `checkpoint()` only raises the flag. Each following
//! `checkpoint()` drops every dirty entry, which are exactly the entries
//! appended since the previous checkpoint, and raises the flag again.
//!
//! ```rust
//! use inertia_render::props::PropStore;
//! use serde_json::json;
//!
//! let mut store = PropStore::new();
//! store.set("name", json!("john"));
//! store.checkpoint();
//! store.set("age", json!(32));
//! store.checkpoint();
//! assert_eq!(store.len(), 1);
//! ```

use super::evaluator;
use super::filter::{self, PropFilter};
use super::lazy::Prop;
use crate::shared::error::PropError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

/// Execution class of a store entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Value,
    LazyImmediateSync,
    LazyImmediateConcurrent,
    LazyDeferredSync,
    LazyDeferredConcurrent,
}

impl EntryKind {
    /// Classify a prop by its lazy flags
    pub fn of(prop: &Prop) -> Self {
        match prop {
            Prop::Value(_) => Self::Value,
            Prop::Lazy(lazy) => match (lazy.is_deferred(), lazy.is_sync()) {
                (false, true) => Self::LazyImmediateSync,
                (false, false) => Self::LazyImmediateConcurrent,
                (true, true) => Self::LazyDeferredSync,
                (true, false) => Self::LazyDeferredConcurrent,
            },
        }
    }

    pub fn is_deferred(self) -> bool {
        matches!(self, Self::LazyDeferredSync | Self::LazyDeferredConcurrent)
    }

    pub fn is_lazy(self) -> bool {
        !matches!(self, Self::Value)
    }
}

/// One appended prop
#[derive(Debug, Clone)]
pub struct PropEntry {
    name: String,
    kind: EntryKind,
    prop: Prop,
    dirty: bool,
}

impl PropEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn prop(&self) -> &Prop {
        &self.prop
    }

    /// Deferred group, for deferred entries only
    pub fn group(&self) -> Option<&str> {
        match &self.prop {
            Prop::Lazy(lazy) if self.kind.is_deferred() => Some(lazy.group_name()),
            _ => None,
        }
    }

    /// Whether the entry was appended after the last checkpoint
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Ordered, checkpointed prop store for a single request
#[derive(Debug, Default)]
pub struct PropStore {
    entries: Vec<PropEntry>,
    filter: PropFilter,
    dirty: bool,
    resolved: Map<String, Value>,
    deferred: BTreeMap<String, Vec<String>>,
}

impl PropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prop, tagged with the current dirty flag
    pub fn set(&mut self, name: impl Into<String>, prop: impl Into<Prop>) {
        let prop = prop.into();
        self.entries.push(PropEntry {
            name: name.into(),
            kind: EntryKind::of(&prop),
            prop,
            dirty: self.dirty,
        });
    }

    /// Mark a save point, discarding everything since the previous one
    pub fn checkpoint(&mut self) {
        if self.dirty {
            self.rollback();
        }
        self.dirty = true;
    }

    fn rollback(&mut self) {
        self.entries.retain(|entry| !entry.dirty);
        self.resolved.clear();
        self.deferred.clear();
        self.filter = PropFilter::default();
        self.dirty = false;
    }

    /// Only evaluate the named props
    ///
    /// Also loads deferred props, since asking for a prop by name is how the
    /// client fetches a deferred group.
    pub fn only<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.only = names.into_iter().map(Into::into).collect();
        self.filter.load_deferred = true;
        self
    }

    /// Never evaluate the named props
    pub fn except<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.except = names.into_iter().map(Into::into).collect();
        self
    }

    /// Evaluate deferred props in the next pass
    pub fn load_deferred(&mut self) -> &mut Self {
        self.filter.load_deferred = true;
        self
    }

    /// Whether `name` passes the current only/except filter
    pub fn include_prop(&self, name: &str) -> bool {
        self.filter.includes(name)
    }

    pub fn filter(&self) -> &PropFilter {
        &self.filter
    }

    /// Return the store to its initial empty state
    pub fn clear(&mut self) {
        self.entries.clear();
        self.resolved.clear();
        self.deferred.clear();
        self.filter = PropFilter::default();
        self.dirty = false;
    }

    pub fn entries(&self) -> &[PropEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Filter and evaluate the props for the current render pass
    ///
    /// Deferred props are only evaluated when explicitly asked for. On error
    /// the resolved map keeps whatever was written before evaluation stopped.
    pub async fn get_props(&mut self, cancel: CancellationToken) -> Result<&Map<String, Value>, PropError> {
        self.resolved.clear();
        self.deferred.clear();

        let plan = filter::plan(&self.entries, &self.filter);
        let (resolved, outcome) = evaluator::evaluate(&plan, &cancel).await;
        self.deferred = plan.deferred;
        self.resolved = resolved;
        outcome?;

        Ok(&self.resolved)
    }

    /// Props resolved by the last `get_props` call
    pub fn props(&self) -> &Map<String, Value> {
        &self.resolved
    }

    /// Deferred prop names per group, skipped by the last `get_props` call
    pub fn deferred_props(&self) -> &BTreeMap<String, Vec<String>> {
        &self.deferred
    }
}
