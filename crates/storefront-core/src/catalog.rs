//! Static product catalog.

use serde::{Deserialize, Serialize};

/// A read-only product definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogItem {
    pub fn new(id: &str, name: &str, description: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: None,
        }
    }
}

/// Display name and unit price for a cart line.
///
/// Ids missing from the catalog resolve to the raw id with a zero price.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub name: &'a str,
    pub price: f64,
    pub known: bool,
}

/// The fixed list of products offered by the storefront, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from items. Later duplicates of an id are dropped.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut unique: Vec<CatalogItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|existing| existing.id == item.id) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    /// The pizza menu the storefront ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogItem::new(
                "margherita",
                "Margherita",
                "San Marzano tomato, fior di latte, basil, extra-virgin olive oil.",
                12.5,
            ),
            CatalogItem::new(
                "pepperoni",
                "Pepperoni",
                "Classic pepperoni, house sauce, mozzarella.",
                14.0,
            ),
            CatalogItem::new(
                "funghi",
                "Fungi",
                "Wild mushrooms, fontina, thyme, garlic butter drizzle.",
                15.5,
            ),
            CatalogItem::new(
                "vegan-delight",
                "Vegan Delight",
                "Vegan cheese, roasted pepper, olives, spinach.",
                13.5,
            ),
            CatalogItem::new(
                "bbq-chicken",
                "BBQ Chicken",
                "Smoky BBQ sauce, chicken, red onion, cilantro.",
                16.0,
            ),
            CatalogItem::new(
                "four-cheese",
                "Four Cheese",
                "Mozzarella, gorgonzola, fontina, parmesan.",
                16.5,
            ),
        ])
    }

    /// Load a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn price_of(&self, id: &str) -> Option<f64> {
        self.get(id).map(|item| item.price)
    }

    /// Resolve an id for display, falling back to the id itself.
    pub fn resolve<'a>(&'a self, id: &'a str) -> Resolved<'a> {
        match self.get(id) {
            Some(item) => Resolved {
                name: &item.name,
                price: item.price,
                known: true,
            },
            None => Resolved {
                name: id,
                price: 0.0,
                known: false,
            },
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
