//! Property tests for the store's ordering and removal contract.

use std::collections::HashSet;

use proptest::prelude::*;
use todo_core::TodoStore;

proptest! {
    #[test]
    fn list_follows_add_order(texts in prop::collection::vec(".{0,40}", 0..40)) {
        let store = TodoStore::new();
        let created: Vec<_> = texts.iter().map(|t| store.add(t.clone())).collect();

        let listed = store.list();
        prop_assert_eq!(&listed, &created);
        let listed_texts: Vec<_> = listed.into_iter().map(|t| t.text).collect();
        prop_assert_eq!(listed_texts, texts);
    }

    #[test]
    fn ids_are_pairwise_distinct(count in 0usize..200) {
        let store = TodoStore::new();
        for i in 0..count {
            store.add(i.to_string());
        }
        let ids: HashSet<_> = store.list().into_iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn remove_drops_exactly_one_and_keeps_order(
        count in 1usize..30,
        pick in any::<prop::sample::Index>(),
    ) {
        let store = TodoStore::new();
        let created: Vec<_> = (0..count).map(|i| store.add(i.to_string())).collect();
        let victim = pick.index(count);

        store.remove(&created[victim].id.to_string());

        let mut expected = created.clone();
        expected.remove(victim);
        prop_assert_eq!(store.list(), expected.clone());

        // Second remove of the same id changes nothing.
        store.remove(&created[victim].id.to_string());
        prop_assert_eq!(store.list(), expected);
    }
}
