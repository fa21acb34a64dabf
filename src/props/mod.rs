//! Prop Resolution Engine
//!
//! Everything that turns the props a handler declared into the JSON map sent
//! to the client, independent of HTTP.
//!
//! # Overview
//!
//! - **`lazy`** - Plain and lazy props, and the ordered `Props` list
//! - **`store`** - The per-request checkpointed prop store
//! - **`filter`** - Selection of the entries evaluated in a pass
//! - **`evaluator`** - Concurrent and sequential thunk execution
//! - **`pool`** - Reuse of cleared stores across requests
//!
//! # Usage
//!
//! ```rust
//! use inertia_render::props::{LazyProp, PropStore};
//! use inertia_render::shared::BoxError;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), inertia_render::shared::PropError> {
//! let mut store = PropStore::new();
//! store.set("title", "Users");
//! store.set("count", LazyProp::concurrent(|_| async { Ok::<_, BoxError>(42) }));
//! store.set("stats", LazyProp::deferred(|_| async { Ok::<_, BoxError>(vec![1, 2]) }));
//!
//! let props = store.get_props(CancellationToken::new()).await?;
//! assert_eq!(props.len(), 2);
//! assert_eq!(store.deferred_props()["default"], vec!["stats".to_string()]);
//! # Ok(())
//! # }
//! ```

mod evaluator;
pub mod filter;
pub mod lazy;
pub mod pool;
pub mod store;

pub use filter::PropFilter;
pub use lazy::{LazyProp, Prop, Props, DEFAULT_GROUP};
pub use pool::StorePool;
pub use store::{EntryKind, PropEntry, PropStore};
