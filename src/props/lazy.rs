//! Lazy Props
//!
//! A lazy prop wraps an async thunk that is only run when the prop survives
//! filtering. Two independent flags classify it:
//!
//! - `sync`: run sequentially on the rendering task, in declaration order,
//!   instead of on its own spawned task
//! - `deferred`: leave it out of the first page load; the client fetches it
//!   afterwards with a partial request for its group
//!
//! Every thunk receives a `CancellationToken` that fires when evaluation is
//! abandoned because another prop failed.

use crate::shared::error::{BoxError, PropError};
use futures_util::future::{BoxFuture, FutureExt};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Group used for deferred props that were not given one
pub const DEFAULT_GROUP: &str = "default";

pub(crate) type ThunkFuture = BoxFuture<'static, Result<Value, ThunkError>>;

type Thunk = Arc<dyn Fn(CancellationToken) -> ThunkFuture + Send + Sync>;

/// Failure of a thunk before the evaluator knows which prop it belongs to
#[derive(Debug)]
pub(crate) enum ThunkError {
    Failed(BoxError),
    Serialization(serde_json::Error),
}

impl ThunkError {
    pub(crate) fn into_prop_error(self, name: &str) -> PropError {
        match self {
            Self::Failed(source) => PropError::failed(name, source),
            Self::Serialization(source) => PropError::serialization(name, source),
        }
    }
}

/// A prop computed by an async thunk
#[derive(Clone)]
pub struct LazyProp {
    thunk: Thunk,
    group: String,
    sync: bool,
    deferred: bool,
}

impl LazyProp {
    /// Wrap `f` as a lazy prop with explicit flags
    pub fn new<F, Fut, T, E>(f: F, deferred: bool, sync: bool) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        let thunk: Thunk = Arc::new(move |cancel| {
            let fut = f(cancel);
            async move {
                let value = fut.await.map_err(|e| ThunkError::Failed(e.into()))?;
                serde_json::to_value(value).map_err(ThunkError::Serialization)
            }
            .boxed()
        });

        Self {
            thunk,
            group: DEFAULT_GROUP.to_string(),
            sync,
            deferred,
        }
    }

    /// Evaluated on its own task, concurrently with other props
    pub fn concurrent<F, Fut, T, E>(f: F) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        Self::new(f, false, false)
    }

    /// Evaluated on the rendering task, in declaration order
    pub fn sequential<F, Fut, T, E>(f: F) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        Self::new(f, false, true)
    }

    /// Deferred to a follow-up request, then evaluated concurrently
    pub fn deferred<F, Fut, T, E>(f: F) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        Self::new(f, true, false)
    }

    /// Deferred to a follow-up request, then evaluated in declaration order
    pub fn deferred_sequential<F, Fut, T, E>(f: F) -> Self
    where
        F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Serialize + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        Self::new(f, true, true)
    }

    /// Set the group the client fetches this prop with
    ///
    /// Only meaningful for deferred props. Each group is requested separately.
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.group = name.into();
        self
    }

    pub fn group_name(&self) -> &str {
        &self.group
    }

    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    pub fn is_sync(&self) -> bool {
        self.sync
    }

    pub(crate) fn call(&self, cancel: CancellationToken) -> ThunkFuture {
        (self.thunk)(cancel)
    }
}

impl fmt::Debug for LazyProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyProp")
            .field("group", &self.group)
            .field("sync", &self.sync)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

/// A prop as handed to the store: a plain value or a lazy thunk
#[derive(Debug, Clone)]
pub enum Prop {
    Value(Value),
    Lazy(LazyProp),
}

impl Prop {
    /// Serialize `value` into a plain prop
    pub fn value<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Value)
    }

    pub fn as_lazy(&self) -> Option<&LazyProp> {
        match self {
            Self::Lazy(lazy) => Some(lazy),
            Self::Value(_) => None,
        }
    }
}

impl From<Value> for Prop {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<LazyProp> for Prop {
    fn from(lazy: LazyProp) -> Self {
        Self::Lazy(lazy)
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

/// Ordered list of page props
///
/// Order matters: sequential props run in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Props {
    entries: Vec<(String, Prop)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prop and return the list, for chaining
    pub fn with(mut self, name: impl Into<String>, prop: impl Into<Prop>) -> Self {
        self.insert(name, prop);
        self
    }

    /// Add a prop
    pub fn insert(&mut self, name: impl Into<String>, prop: impl Into<Prop>) {
        self.entries.push((name.into(), prop.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prop)> {
        self.entries.iter().map(|(name, prop)| (name.as_str(), prop))
    }
}

impl IntoIterator for Props {
    type Item = (String, Prop);
    type IntoIter = std::vec::IntoIter<(String, Prop)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, P> FromIterator<(K, P)> for Props
where
    K: Into<String>,
    P: Into<Prop>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (name, prop) in iter {
            props.insert(name, prop);
        }
        props
    }
}
