//! storefront-core: catalog, cart state, totals, and persistence for a
//! storefront widget.
//!
//! - **Catalog**: static, read-only product list
//! - **Cart**: ordered lines with one line per id and quantities >= 1
//! - **CartManager**: owns the cart; persists and re-renders after every mutation
//! - **Totals**: subtotal/tax/total derived on every read, never stored
//! - **Store**: string-keyed persistence (memory, JSON file, SQLite)
//! - **RenderSurface**: the seam views implement to receive cart snapshots
//! - **Drawer / Checkout / Contact**: the small interactions around the cart
//!
//! # Example
//!
//! ```
//! use storefront_core::{CartManager, Catalog, MemoryStore};
//!
//! let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
//! manager.add_to_cart("margherita", 2);
//! let totals = manager.compute_totals();
//! assert!((totals.total - 27.0).abs() < 1e-9);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod currency;
pub mod drawer;
pub mod error;
pub mod manager;
pub mod quantity;
pub mod render;
pub mod store;
pub mod totals;

#[cfg(feature = "sqlite")]
pub mod sqlite_store;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogItem, Resolved};
pub use checkout::{checkout, order_summary, OrderReceipt};
pub use config::{StoreBackend, StorefrontConfig};
pub use contact::{ContactForm, ContactRequest, ContactStatus};
pub use currency::format_currency;
pub use drawer::{DrawerEvent, DrawerState};
pub use error::{ConfigError, ContactError, Result, StoreError, StorefrontError};
pub use manager::CartManager;
pub use quantity::{clamp_qty, normalize_qty};
pub use render::{CartView, LineView, RenderSurface};
pub use store::{open_store, FileStore, KeyValueStore, MemoryStore};
pub use totals::{compute_totals, Totals};

#[cfg(feature = "sqlite")]
pub use sqlite_store::SqliteStore;
