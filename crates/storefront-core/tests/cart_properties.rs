//! Property-based tests for cart invariants

use std::collections::HashSet;

use proptest::prelude::*;
use storefront_core::{Cart, CartManager, Catalog, KeyValueStore, MemoryStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String, i64),
    Set(String, i64),
    Increment(String),
    Decrement(String),
    Clear,
}

fn id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "margherita",
        "pepperoni",
        "funghi",
        "four-cheese",
        "not-on-menu",
    ])
    .prop_map(str::to_string)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (id_strategy(), -3i64..10).prop_map(|(id, q)| Op::Add(id, q)),
        3 => (id_strategy(), -3i64..10).prop_map(|(id, q)| Op::Set(id, q)),
        2 => id_strategy().prop_map(Op::Increment),
        2 => id_strategy().prop_map(Op::Decrement),
        1 => Just(Op::Clear),
    ]
}

fn apply(manager: &mut CartManager<MemoryStore>, op: &Op) {
    match op {
        Op::Add(id, q) => manager.add_to_cart(id, *q),
        Op::Set(id, q) => manager.set_qty(id, *q),
        Op::Increment(id) => manager.increment(id),
        Op::Decrement(id) => manager.decrement(id),
        Op::Clear => manager.clear_cart(),
    }
}

proptest! {
    #[test]
    fn ids_unique_and_quantities_positive(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        for op in &ops {
            apply(&mut manager, op);

            let mut seen = HashSet::new();
            for line in manager.cart().lines() {
                prop_assert!(line.qty >= 1);
                prop_assert!(seen.insert(line.id.clone()), "duplicate id {}", line.id);
            }
        }
    }

    #[test]
    fn persisted_state_reloads_equal(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        for op in &ops {
            apply(&mut manager, op);
        }
        let expected = manager.cart().clone();

        let reloaded = CartManager::with_defaults(Catalog::builtin(), manager.into_store());
        prop_assert_eq!(reloaded.cart(), &expected);
    }

    #[test]
    fn serialize_round_trip(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        for op in &ops {
            apply(&mut manager, op);
        }
        let json = manager.cart().to_json().unwrap();
        prop_assert_eq!(&Cart::from_json(&json), manager.cart());
        prop_assert_eq!(manager.store().get("lp_cart_v1").unwrap(), if ops.is_empty() { None } else { Some(json) });
    }

    #[test]
    fn adds_merge(q1 in 1i64..50, q2 in 1i64..50) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        manager.add_to_cart("funghi", q1);
        manager.add_to_cart("funghi", q2);
        prop_assert_eq!(manager.cart().len(), 1);
        prop_assert_eq!(i64::from(manager.cart().qty_of("funghi")), q1 + q2);
    }

    #[test]
    fn totals_are_pure_and_tax_consistent(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        for op in &ops {
            apply(&mut manager, op);
        }
        let first = manager.compute_totals();
        let second = manager.compute_totals();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.tax, first.subtotal * 0.08);
        prop_assert_eq!(first.total, first.subtotal + first.tax);
        prop_assert!(first.subtotal >= 0.0);
    }

    #[test]
    fn set_on_absent_id_never_creates(q in 1i64..100) {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        manager.add_to_cart("margherita", 1);
        let before = manager.cart().clone();
        manager.set_qty("pepperoni", q);
        prop_assert_eq!(manager.cart(), &before);
    }
}
