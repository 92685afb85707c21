//! Property-Based Tests for the Store Module
//!
//! Uses proptest to verify id assignment and merge semantics across
//! arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::store::{UserPatch, UserStore};

// == Strategies ==
/// Generates optional user field values
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9@. ]{1,32}")
}

/// Generates a sequence of store operations for testing
#[derive(Debug, Clone)]
enum StoreOp {
    Insert {
        name: Option<String>,
        email: Option<String>,
    },
    Update {
        id: u64,
        name: Option<String>,
        email: Option<String>,
    },
    Remove {
        id: u64,
    },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (field_strategy(), field_strategy())
            .prop_map(|(name, email)| StoreOp::Insert { name, email }),
        (1u64..20, field_strategy(), field_strategy())
            .prop_map(|(id, name, email)| StoreOp::Update { id, name, email }),
        (1u64..20).prop_map(|id| StoreOp::Remove { id }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, assigned ids SHALL be unique and
    // strictly increasing, including across deletions.
    #[test]
    fn prop_ids_unique_and_monotonic(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let mut store = UserStore::new();
        let mut seen_ids = HashSet::new();
        let mut last_id = 0u64;

        for op in ops {
            match op {
                StoreOp::Insert { name, email } => {
                    let user = store.insert(name, email);
                    prop_assert!(user.id > last_id);
                    prop_assert!(seen_ids.insert(user.id));
                    last_id = user.id;
                }
                StoreOp::Update { id, name, email } => {
                    let _ = store.update(id, UserPatch { name, email });
                }
                StoreOp::Remove { id } => {
                    let _ = store.remove(id);
                }
            }
        }
    }

    // For any sequence of operations, the store length SHALL equal the
    // number of successful inserts minus successful removals, and every
    // listed record SHALL be retrievable by its own id.
    #[test]
    fn prop_len_matches_live_records(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let mut store = UserStore::new();
        let mut live: u64 = 0;

        for op in ops {
            match op {
                StoreOp::Insert { name, email } => {
                    store.insert(name, email);
                    live += 1;
                }
                StoreOp::Update { id, name, email } => {
                    let _ = store.update(id, UserPatch { name, email });
                }
                StoreOp::Remove { id } => {
                    if store.remove(id).is_ok() {
                        live -= 1;
                    }
                }
            }
        }

        prop_assert_eq!(store.len() as u64, live);
        for (id, user) in store.list() {
            prop_assert_eq!(user.id, id);
            prop_assert_eq!(store.get(id).unwrap(), user);
        }
    }

    // Updating with a patch SHALL overwrite exactly the provided fields
    // and leave the others unchanged.
    #[test]
    fn prop_update_merges_only_provided_fields(
        name in field_strategy(),
        email in field_strategy(),
        patch_name in field_strategy(),
        patch_email in field_strategy(),
    ) {
        let mut store = UserStore::new();
        let created = store.insert(name.clone(), email.clone());

        let updated = store.update(created.id, UserPatch {
            name: patch_name.clone(),
            email: patch_email.clone(),
        }).unwrap();

        prop_assert_eq!(updated.id, created.id);
        prop_assert_eq!(updated.name, patch_name.or(name));
        prop_assert_eq!(updated.email, patch_email.or(email));
    }
}
