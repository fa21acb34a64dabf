//! Property-based tests for the checkpointed prop store

use inertia_render::props::PropStore;
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..12)
}

proptest! {
    #[test]
    fn test_second_checkpoint_restores_first(before in names(), after in names()) {
        let mut store = PropStore::new();
        for name in &before {
            store.set(name.clone(), json!(1));
        }
        store.checkpoint();
        for name in &after {
            store.set(name.clone(), json!(2));
        }
        store.checkpoint();

        let kept: Vec<&str> = store.entries().iter().map(|e| e.name()).collect();
        let expected: Vec<&str> = before.iter().map(String::as_str).collect();
        prop_assert_eq!(kept, expected);
        prop_assert!(store.is_dirty());
    }

    #[test]
    fn test_last_value_per_name_resolves(values in prop::collection::vec(("[a-d]", 0..100i64), 0..20)) {
        let mut store = PropStore::new();
        let mut expected = BTreeMap::new();
        for (name, value) in &values {
            store.set(name.clone(), json!(value));
            expected.insert(name.clone(), json!(value));
        }

        let resolved = runtime().block_on(async {
            store.get_props(CancellationToken::new()).await.map(|props| props.clone())
        }).unwrap();

        let resolved: BTreeMap<String, serde_json::Value> = resolved.into_iter().collect();
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn test_clear_resets_everything(before in names(), only in names()) {
        let mut store = PropStore::new();
        for name in &before {
            store.set(name.clone(), json!(null));
        }
        store.checkpoint();
        store.only(only);
        store.clear();

        prop_assert!(store.is_empty());
        prop_assert!(!store.is_dirty());
        prop_assert!(!store.filter().loads_deferred());
        prop_assert!(store.filter().only().is_empty());
    }
}
