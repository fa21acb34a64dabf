//! Lazy Evaluator
//!
//! Runs an [`EvaluationPlan`] against one cancellation scope:
//!
//! 1. Plain values are copied into the resolved map.
//! 2. Every concurrent lazy prop is spawned on its own task; each task writes
//!    its result under the shared lock.
//! 3. Sequential lazy props run in entry order on the calling task.
//! 4. The concurrent tasks are joined. The first real error wins.
//!
//! A failing concurrent task cancels the scope itself, so siblings and the
//! sequential pass stop without waiting for the join.
//!
//! A sequential error cancels the scope and drains every in-flight task
//! before it is returned.

use super::filter::EvaluationPlan;
use super::lazy::Prop;
use crate::shared::error::PropError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::{Id, JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

type SharedProps = Arc<Mutex<Map<String, Value>>>;

/// Evaluate `plan` and return the resolved props together with the outcome
///
/// The map is returned even on error and holds every prop that resolved
/// before evaluation stopped.
pub(crate) async fn evaluate(
    plan: &EvaluationPlan<'_>,
    parent: &CancellationToken,
) -> (Map<String, Value>, Result<(), PropError>) {
    let mut resolved = Map::new();
    for entry in &plan.values {
        if let Some(value) = entry_value(entry.prop()) {
            resolved.insert(entry.name().to_string(), value.clone());
        }
    }

    if plan.concurrent.is_empty() && plan.sequential.is_empty() {
        return (resolved, Ok(()));
    }

    tracing::debug!(
        values = plan.values.len(),
        concurrent = plan.concurrent.len(),
        sequential = plan.sequential.len(),
        "Evaluating lazy props"
    );

    let cancel = parent.child_token();
    let shared: SharedProps = Arc::new(Mutex::new(resolved));
    let mut tasks = JoinSet::new();
    let mut names: HashMap<Id, String> = HashMap::with_capacity(plan.concurrent.len());

    for entry in &plan.concurrent {
        let Some(lazy) = entry.prop().as_lazy().cloned() else {
            continue;
        };
        let name = entry.name().to_string();
        let token = cancel.clone();
        let out = Arc::clone(&shared);
        let task_name = name.clone();

        let handle = tasks.spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => Err(PropError::cancelled(&task_name)),
                result = lazy.call(token.clone()) => result.map_err(|e| e.into_prop_error(&task_name)),
            };
            match result {
                Ok(value) => {
                    out.lock().await.insert(task_name, value);
                    Ok(())
                }
                Err(err) => {
                    // Stop siblings and the sequential pass right away.
                    token.cancel();
                    Err(err)
                }
            }
        });
        names.insert(handle.id(), name);
    }

    let mut first_error: Option<PropError> = None;

    for entry in &plan.sequential {
        let Some(lazy) = entry.prop().as_lazy() else {
            continue;
        };
        let name = entry.name();

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PropError::cancelled(name)),
            result = lazy.call(cancel.clone()) => result.map_err(|e| e.into_prop_error(name)),
        };

        match result {
            Ok(value) => {
                shared.lock().await.insert(name.to_string(), value);
            }
            Err(err) => {
                tracing::debug!(prop = %name, error = %err, "Sequential prop failed, cancelling evaluation");
                first_error = Some(err);
                cancel.cancel();
                tasks.abort_all();
                break;
            }
        }
    }

    while let Some(joined) = tasks.join_next_with_id().await {
        let failure = match joined {
            Ok((_, Ok(()))) => continue,
            Ok((_, Err(err))) => err,
            Err(join_err) => match task_failure(join_err, &names) {
                Some(err) => err,
                None => continue,
            },
        };

        if first_error.is_none() {
            tracing::debug!(prop = %failure.name(), error = %failure, "Concurrent prop failed, cancelling evaluation");
            cancel.cancel();
            tasks.abort_all();
        }
        record(&mut first_error, failure);
    }

    let resolved = match Arc::try_unwrap(shared) {
        Ok(map) => map.into_inner(),
        Err(shared) => std::mem::take(&mut *shared.lock().await),
    };

    match first_error {
        Some(err) => (resolved, Err(err)),
        None => (resolved, Ok(())),
    }
}

fn entry_value(prop: &Prop) -> Option<&Value> {
    match prop {
        Prop::Value(value) => Some(value),
        Prop::Lazy(_) => None,
    }
}

/// Map a join failure to a prop error; aborted tasks are not failures
fn task_failure(err: JoinError, names: &HashMap<Id, String>) -> Option<PropError> {
    if !err.is_panic() {
        return None;
    }
    let name = names.get(&err.id()).map(String::as_str).unwrap_or("<unknown>");
    tracing::error!(prop = %name, "Concurrent prop task panicked");
    Some(PropError::panicked(name))
}

/// Keep the first error, unless it is a cancellation and a real failure shows up
fn record(slot: &mut Option<PropError>, err: PropError) {
    match slot {
        None => *slot = Some(err),
        Some(current) if current.is_cancelled() && !err.is_cancelled() => *slot = Some(err),
        Some(_) => {}
    }
}
