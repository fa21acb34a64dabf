//! Filter Stage
//!
//! Decides which store entries are evaluated in the current pass.
//!
//! - Only the last entry appended under a name is considered.
//! - A deferred lazy entry is skipped and recorded under its group unless
//!   deferred loading was requested.
//! - Everything else is kept iff the only/except filter admits its name.

use super::lazy::Prop;
use super::store::{EntryKind, PropEntry};
use std::collections::{BTreeMap, HashMap};

/// Name filters requested for the current pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropFilter {
    pub(crate) only: Vec<String>,
    pub(crate) except: Vec<String>,
    pub(crate) load_deferred: bool,
}

impl PropFilter {
    /// Whether `name` passes the only/except filter
    ///
    /// `except` always wins over `only`.
    pub fn includes(&self, name: &str) -> bool {
        if self.except.iter().any(|n| n == name) {
            return false;
        }
        if !self.only.is_empty() && !self.only.iter().any(|n| n == name) {
            return false;
        }
        true
    }

    pub fn only(&self) -> &[String] {
        &self.only
    }

    pub fn except(&self) -> &[String] {
        &self.except
    }

    pub fn loads_deferred(&self) -> bool {
        self.load_deferred
    }
}

/// Entries selected for one evaluation pass
#[derive(Debug, Default)]
pub(crate) struct EvaluationPlan<'a> {
    pub(crate) values: Vec<&'a PropEntry>,
    pub(crate) concurrent: Vec<&'a PropEntry>,
    pub(crate) sequential: Vec<&'a PropEntry>,
    pub(crate) deferred: BTreeMap<String, Vec<String>>,
}

impl EvaluationPlan<'_> {
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty() && self.concurrent.is_empty() && self.sequential.is_empty()
    }
}

/// Split `entries` into the evaluation plan for this pass
pub(crate) fn plan<'a>(entries: &'a [PropEntry], filter: &PropFilter) -> EvaluationPlan<'a> {
    let mut last_index: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        last_index.insert(entry.name(), index);
    }

    let mut plan = EvaluationPlan::default();

    for (index, entry) in entries.iter().enumerate() {
        if last_index.get(entry.name()) != Some(&index) {
            continue;
        }

        let kind = entry.kind();
        if kind.is_deferred() && !filter.load_deferred {
            if let Prop::Lazy(lazy) = entry.prop() {
                plan.deferred
                    .entry(lazy.group_name().to_string())
                    .or_default()
                    .push(entry.name().to_string());
            }
            continue;
        }

        if !filter.includes(entry.name()) {
            continue;
        }

        match kind {
            EntryKind::Value => plan.values.push(entry),
            EntryKind::LazyImmediateConcurrent | EntryKind::LazyDeferredConcurrent => {
                plan.concurrent.push(entry)
            }
            EntryKind::LazyImmediateSync | EntryKind::LazyDeferredSync => plan.sequential.push(entry),
        }
    }

    plan
}
