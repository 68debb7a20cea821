//! Cart manager: the single owner of cart state.
//!
//! Every mutation runs to completion synchronously: update the cart, write
//! the full serialized cart to the store, then re-render every surface from
//! a fresh snapshot. Store failures are logged and swallowed.

use tracing::{debug, warn};

use crate::config::StorefrontConfig;
use crate::quantity::{clamp_qty, ADD_FLOOR, SET_FLOOR};
use crate::render::{CartView, RenderSurface};
use crate::store::{open_store, KeyValueStore};
use crate::totals::{compute_totals, Totals};
use crate::{Cart, Catalog};

/// Owns the cart, its persistence, and the surfaces that display it.
pub struct CartManager<S: KeyValueStore> {
    cart: Cart,
    catalog: Catalog,
    store: S,
    storage_key: String,
    tax_rate: f64,
    currency_symbol: String,
    surfaces: Vec<Box<dyn RenderSurface>>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Restore the cart from `store`.
    ///
    /// A missing, unreadable, or malformed value starts an empty cart.
    pub fn load(catalog: Catalog, store: S, config: &StorefrontConfig) -> Self {
        let cart = match store.get(&config.storage_key) {
            Ok(Some(json)) => Cart::from_json(&json),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("Failed to read cart state: {}", e);
                Cart::new()
            }
        };
        debug!(
            "Loaded cart with {} lines from key {:?}",
            cart.len(),
            config.storage_key
        );

        Self {
            cart,
            catalog,
            store,
            storage_key: config.storage_key.clone(),
            tax_rate: config.tax_rate,
            currency_symbol: config.currency_symbol.clone(),
            surfaces: Vec::new(),
        }
    }

    /// Restore using the default key, tax rate, and currency.
    pub fn with_defaults(catalog: Catalog, store: S) -> Self {
        Self::load(catalog, store, &StorefrontConfig::default())
    }

    /// Register a surface and draw it once with the current state.
    pub fn add_surface(&mut self, surface: impl RenderSurface + 'static) {
        let mut surface: Box<dyn RenderSurface> = Box::new(surface);
        surface.render(&self.snapshot());
        self.surfaces.push(surface);
    }

    // ==================== Mutations ====================

    /// Add `qty` of `id`, merging into an existing line.
    ///
    /// Quantities below 1 are treated as 1. Ids missing from the catalog are
    /// accepted and display with a fallback name and zero price.
    pub fn add_to_cart(&mut self, id: &str, qty: i64) {
        let qty = clamp_qty(qty, ADD_FLOOR);
        self.cart.add(id, qty);
        debug!("Added {} x {:?}", qty, id);
        self.commit();
    }

    /// Add a single unit of `id`.
    pub fn add_one(&mut self, id: &str) {
        self.add_to_cart(id, 1);
    }

    /// Set the quantity of an existing line; 0 (or less) removes it.
    ///
    /// This never creates a line: setting a positive quantity for an id that
    /// is not in the cart leaves the cart unchanged.
    pub fn set_qty(&mut self, id: &str, qty: i64) {
        let qty = clamp_qty(qty, SET_FLOOR);
        let changed = self.cart.set(id, qty);
        debug!("Set {:?} to {} (changed: {})", id, qty, changed);
        self.commit();
    }

    /// Per-line "+" control.
    pub fn increment(&mut self, id: &str) {
        let current = i64::from(self.cart.qty_of(id));
        self.set_qty(id, current + 1);
    }

    /// Per-line "−" control; reaching 0 removes the line.
    pub fn decrement(&mut self, id: &str) {
        let current = i64::from(self.cart.qty_of(id));
        self.set_qty(id, (current - 1).max(0));
    }

    /// Per-line "Remove" control.
    pub fn remove(&mut self, id: &str) {
        self.set_qty(id, 0);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("Cleared cart");
        self.commit();
    }

    // ==================== Reads ====================

    /// Recompute totals from the current cart. Pure.
    pub fn compute_totals(&self) -> Totals {
        compute_totals(&self.cart, &self.catalog, self.tax_rate)
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> CartView {
        CartView::build(&self.cart, &self.catalog, self.tax_rate, &self.currency_symbol)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Give back the store, dropping the cart and surfaces.
    pub fn into_store(self) -> S {
        self.store
    }

    // ==================== Internals ====================

    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&mut self) {
        let json = match self.cart.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize cart: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.storage_key, &json) {
            warn!("Failed to persist cart: {}", e);
        }
    }

    fn notify(&mut self) {
        if self.surfaces.is_empty() {
            return;
        }
        let view = self.snapshot();
        for surface in &mut self.surfaces {
            surface.render(&view);
        }
    }
}

impl CartManager<Box<dyn KeyValueStore>> {
    /// Validate `config`, open the store backend it names, and restore the
    /// cart from it.
    pub fn open(catalog: Catalog, config: &StorefrontConfig) -> crate::Result<Self> {
        config.validate()?;
        let store = open_store(&config.store)?;
        Ok(Self::load(catalog, store, config))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::StoreBackend;
    use crate::error::{StoreError, StorefrontError};
    use crate::store::MemoryStore;
    use crate::CartLine;

    fn manager() -> CartManager<MemoryStore> {
        CartManager::with_defaults(Catalog::builtin(), MemoryStore::new())
    }

    #[test]
    fn add_persists_under_storage_key() {
        let mut m = manager();
        m.add_to_cart("margherita", 2);
        assert_eq!(
            m.store().get("lp_cart_v1").unwrap().as_deref(),
            Some(r#"[{"id":"margherita","qty":2}]"#)
        );
    }

    #[test]
    fn add_clamps_to_one() {
        let mut m = manager();
        m.add_to_cart("pepperoni", 0);
        m.add_to_cart("pepperoni", -7);
        assert_eq!(m.cart().lines(), &[CartLine::new("pepperoni", 2)]);
    }

    #[test]
    fn increment_and_decrement() {
        let mut m = manager();
        m.add_one("funghi");
        m.increment("funghi");
        m.increment("funghi");
        assert_eq!(m.cart().qty_of("funghi"), 3);
        m.decrement("funghi");
        m.decrement("funghi");
        m.decrement("funghi");
        assert!(m.cart().is_empty());
    }

    #[test]
    fn increment_absent_is_noop() {
        let mut m = manager();
        m.increment("funghi");
        assert!(m.cart().is_empty());
    }

    #[test]
    fn remove_drops_line() {
        let mut m = manager();
        m.add_one("a");
        m.add_one("b");
        m.remove("a");
        assert_eq!(m.cart().lines(), &[CartLine::new("b", 1)]);
    }

    #[test]
    fn surfaces_render_on_register_and_every_mutation() {
        let seen: Rc<RefCell<Vec<u64>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut m = manager();
        m.add_surface(move |view: &CartView| sink.borrow_mut().push(view.item_count));
        m.add_to_cart("margherita", 2);
        m.set_qty("unknown", 4);
        m.clear_cart();

        assert_eq!(*seen.borrow(), vec![0, 2, 2, 0]);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io("unavailable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io("read-only".into()))
        }
    }

    #[test]
    fn open_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            store: StoreBackend::File {
                path: dir.path().join("cart.json"),
            },
            ..StorefrontConfig::default()
        };

        let mut m = CartManager::open(Catalog::builtin(), &config).unwrap();
        m.add_to_cart("pepperoni", 3);
        drop(m);

        let m = CartManager::open(Catalog::builtin(), &config).unwrap();
        assert_eq!(m.cart().qty_of("pepperoni"), 3);
    }

    #[test]
    fn open_rejects_invalid_config() {
        let config = StorefrontConfig {
            tax_rate: 2.0,
            store: StoreBackend::Memory,
            ..StorefrontConfig::default()
        };
        let result = CartManager::open(Catalog::builtin(), &config);
        assert!(matches!(result, Err(StorefrontError::Config(_))));
    }

    #[test]
    fn store_failures_are_swallowed() {
        let mut m = CartManager::with_defaults(Catalog::builtin(), BrokenStore);
        assert!(m.cart().is_empty());
        m.add_to_cart("margherita", 1);
        assert_eq!(m.cart().qty_of("margherita"), 1);
    }
}
