//! Property-based tests for scoped resolution guarantees

use projector::scope::Scope;
use projector::store::{PathScopedStore, ScopeMap};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,4}"
}

fn scope_strategy() -> impl Strategy<Value = Scope> {
    prop::collection::vec(segment(), 0..4)
        .prop_map(|segments| Scope::parse(&format!("/{}", segments.join("/"))).unwrap())
}

fn store_strategy() -> impl Strategy<Value = ScopeMap> {
    prop::collection::btree_map(
        scope_strategy(),
        prop::collection::btree_map("[a-c]", "[a-z]{0,3}", 0..3),
        0..6,
    )
}

proptest! {
    #[test]
    fn set_then_get_returns_value(
        scopes in store_strategy(),
        current in scope_strategy(),
        key in "[a-d]",
        value in "[a-z]{0,5}",
    ) {
        let mut store = PathScopedStore::new(current, scopes);
        store.set_value(&key, &value);
        prop_assert_eq!(store.get_value(&key), Some(value.as_str()));
    }

    #[test]
    fn merged_view_agrees_with_lookup(
        scopes in store_strategy(),
        current in scope_strategy(),
    ) {
        let store = PathScopedStore::new(current, scopes);
        let merged = store.get_value_merged();
        for (key, value) in &merged {
            prop_assert_eq!(store.get_value(key), Some(value.as_str()));
        }
        for key in ["a", "b", "c"] {
            prop_assert_eq!(store.get_value(key).is_some(), merged.contains_key(key));
        }
    }

    #[test]
    fn removal_is_idempotent_and_local(
        scopes in store_strategy(),
        current in scope_strategy(),
        key in "[a-c]",
    ) {
        let mut store = PathScopedStore::new(current.clone(), scopes.clone());
        store.remove_value(&key);
        let once = store.get_value_all().clone();
        store.remove_value(&key);
        prop_assert_eq!(store.get_value_all(), &once);

        for (scope, entries) in &scopes {
            if scope != &current {
                prop_assert_eq!(once.get(scope), Some(entries));
            }
        }
    }

    #[test]
    fn ancestors_end_at_root(current in scope_strategy()) {
        let walk: Vec<Scope> = current.ancestors().collect();
        prop_assert_eq!(walk.len(), current.depth() + 1);
        prop_assert_eq!(walk.first(), Some(&current));
        prop_assert_eq!(walk.last(), Some(&Scope::root()));
    }
}
