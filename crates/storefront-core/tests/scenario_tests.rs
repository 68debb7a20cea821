//! End-to-end cart scenarios against the public API

use std::cell::RefCell;
use std::rc::Rc;

use insta::assert_snapshot;
use storefront_core::{
    checkout, CartLine, CartManager, CartView, Catalog, FileStore, KeyValueStore, MemoryStore,
    StoreBackend, StorefrontConfig, Totals,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn fresh() -> CartManager<MemoryStore> {
    CartManager::with_defaults(Catalog::builtin(), MemoryStore::new())
}

#[test]
fn two_margheritas_totals() {
    let mut manager = fresh();
    manager.add_to_cart("margherita", 2);

    assert_eq!(manager.cart().lines(), &[CartLine::new("margherita", 2)]);
    let totals = manager.compute_totals();
    assert!(approx(totals.subtotal, 25.0));
    assert!(approx(totals.tax, 2.0));
    assert!(approx(totals.total, 27.0));
}

#[test]
fn repeated_add_merges() {
    let mut manager = fresh();
    manager.add_to_cart("margherita", 1);
    manager.add_to_cart("margherita", 1);
    assert_eq!(manager.cart().lines(), &[CartLine::new("margherita", 2)]);
}

#[test]
fn set_zero_empties_cart() {
    let mut manager = fresh();
    manager.add_to_cart("pepperoni", 1);
    manager.set_qty("pepperoni", 0);
    assert!(manager.cart().is_empty());
    assert_eq!(manager.compute_totals(), Totals::zero());
}

#[test]
fn set_unknown_is_noop() {
    let mut manager = fresh();
    manager.add_to_cart("margherita", 1);
    manager.set_qty("does-not-exist", 5);
    assert_eq!(manager.cart().lines(), &[CartLine::new("margherita", 1)]);
}

#[test]
fn malformed_persisted_value_loads_empty() {
    let store = MemoryStore::with_entry("lp_cart_v1", "{not: valid json");
    let manager = CartManager::with_defaults(Catalog::builtin(), store);
    assert!(manager.cart().is_empty());
}

#[test]
fn insertion_order_preserved_across_reload() {
    let mut manager = fresh();
    manager.add_to_cart("four-cheese", 1);
    manager.add_to_cart("margherita", 3);
    manager.add_to_cart("bbq-chicken", 2);
    manager.add_to_cart("four-cheese", 1);

    let reloaded = CartManager::with_defaults(Catalog::builtin(), manager.into_store());
    let ids: Vec<_> = reloaded.cart().lines().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["four-cheese", "margherita", "bbq-chicken"]);
    assert_eq!(reloaded.cart().qty_of("four-cheese"), 2);
}

#[test]
fn custom_storage_key_and_tax() {
    let config = StorefrontConfig {
        storage_key: "shop_cart".into(),
        tax_rate: 0.1,
        store: StoreBackend::Memory,
        ..StorefrontConfig::default()
    };
    let mut manager = CartManager::load(Catalog::builtin(), MemoryStore::new(), &config);
    manager.add_to_cart("pepperoni", 1);

    assert!(manager.store().get("shop_cart").unwrap().is_some());
    assert!(manager.store().get("lp_cart_v1").unwrap().is_none());
    assert!(approx(manager.compute_totals().total, 15.4));
}

#[test]
fn unknown_id_renders_with_fallback() {
    let mut manager = fresh();
    manager.add_to_cart("calzone", 2);
    let view = manager.snapshot();
    assert_eq!(view.lines[0].name, "calzone");
    assert_eq!(view.money(view.lines[0].line_total), "$0.00");
    assert_eq!(view.item_count, 2);
}

#[test]
fn both_surfaces_see_identical_snapshots() {
    let summary: Rc<RefCell<Option<CartView>>> = Rc::default();
    let drawer: Rc<RefCell<Option<CartView>>> = Rc::default();

    let mut manager = fresh();
    let s = Rc::clone(&summary);
    manager.add_surface(move |view: &CartView| *s.borrow_mut() = Some(view.clone()));
    let d = Rc::clone(&drawer);
    manager.add_surface(move |view: &CartView| *d.borrow_mut() = Some(view.clone()));

    manager.add_to_cart("funghi", 2);
    manager.decrement("funghi");

    assert_eq!(*summary.borrow(), *drawer.borrow());
    assert_eq!(summary.borrow().as_ref().map(|v| v.item_count), Some(1));
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut manager =
        CartManager::with_defaults(Catalog::builtin(), FileStore::open(&path).unwrap());
    manager.add_to_cart("vegan-delight", 2);
    manager.add_to_cart("funghi", 1);
    drop(manager);

    let manager = CartManager::with_defaults(Catalog::builtin(), FileStore::open(&path).unwrap());
    assert_eq!(
        manager.cart().lines(),
        &[CartLine::new("vegan-delight", 2), CartLine::new("funghi", 1)]
    );
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_store_survives_restart() {
    use storefront_core::SqliteStore;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.db");

    let mut manager =
        CartManager::with_defaults(Catalog::builtin(), SqliteStore::open(&path).unwrap());
    manager.add_to_cart("bbq-chicken", 3);
    drop(manager);

    let manager =
        CartManager::with_defaults(Catalog::builtin(), SqliteStore::open(&path).unwrap());
    assert_eq!(manager.cart().qty_of("bbq-chicken"), 3);
}

#[test]
fn checkout_confirmation_text() {
    let mut manager = fresh();
    manager.add_to_cart("margherita", 2);
    manager.add_to_cart("mystery", 1);

    let receipt = checkout(&mut manager).unwrap();
    assert_snapshot!(receipt.confirmation_message(), @r"
    Thanks! Order received:
    2× Margherita, 1× mystery
    Total: $27.00

    This demo site does not process payments. Implement a backend or payment gateway to complete orders.
    ");
    assert!(manager.cart().is_empty());
}
