//! Shopping cart kept in local storage under [`CART_KEY`].
//!
//! The stored value is a JSON array whose entries are either product ids or
//! full product snapshots. Nothing validates it on write, so reads are
//! lenient: unknown entries are skipped and an unreadable value is an empty
//! cart. Numeric ids stay numbers when the cart is written back.

use std::borrow::Cow;
use std::sync::Mutex;

use renovlux_api::types::Product;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tokio::sync::watch;

use crate::error::LibError;
use crate::services::ProductsApi;
use crate::storage::LocalStorage;

pub const CART_KEY: &str = "cartItems";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartEntry {
    Id(String),
    NumericId(Number),
    Product(Box<Product>),
}

impl CartEntry {
    pub fn id(&self) -> Cow<'_, str> {
        match self {
            CartEntry::Id(id) => Cow::Borrowed(id),
            CartEntry::NumericId(id) => Cow::Owned(id.to_string()),
            CartEntry::Product(product) => Cow::Borrowed(&product.id),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(id) if !id.trim().is_empty() => Some(CartEntry::Id(id)),
            Value::Number(n) => Some(CartEntry::NumericId(n)),
            obj @ Value::Object(_) => match serde_json::from_value::<Product>(obj) {
                Ok(product) if !product.id.is_empty() => Some(CartEntry::Product(Box::new(product))),
                Ok(_) => None,
                Err(e) => {
                    tracing::debug!("Skipping unreadable cart entry: {}", e);
                    None
                }
            },
            _ => None,
        }
    }
}

/// Parses a stored cart value. Anything but a JSON array reads as empty.
pub fn parse_entries(raw: &str) -> Vec<CartEntry> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => values.into_iter().filter_map(CartEntry::from_value).collect(),
        Ok(_) => Vec::new(),
        Err(e) => {
            tracing::warn!("Ignoring malformed cart in storage: {}", e);
            Vec::new()
        }
    }
}

/// Sum of the prices that are known.
pub fn subtotal(products: &[Product]) -> f64 {
    products.iter().filter_map(|p| p.price).sum()
}

/// Owner of the `cartItems` key. Writes go through a lock so concurrent
/// adds in one process cannot lose each other; subscribers see the cart
/// after every write.
pub struct CartStore {
    storage: LocalStorage,
    write_lock: Mutex<()>,
    changes: watch::Sender<Vec<CartEntry>>,
}

impl CartStore {
    pub fn new(storage: LocalStorage) -> Self {
        let initial = read_entries(&storage);
        let (changes, _) = watch::channel(initial);
        Self {
            storage,
            write_lock: Mutex::new(()),
            changes,
        }
    }

    pub fn items(&self) -> Vec<CartEntry> {
        read_entries(&self.storage)
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<CartEntry>> {
        self.changes.subscribe()
    }

    /// Adds an entry unless one with the same id is already there.
    /// Returns whether the cart changed.
    pub fn add(&self, entry: CartEntry) -> Result<bool, LibError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.items();
        if items.iter().any(|existing| existing.id() == entry.id()) {
            return Ok(false);
        }
        items.push(entry);
        self.write(items)?;
        Ok(true)
    }

    /// Removes every entry with this id. Returns whether the cart changed.
    pub fn remove(&self, id: &str) -> Result<bool, LibError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.items();
        let before = items.len();
        items.retain(|entry| entry.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write(items)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), LibError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.storage.remove_item(CART_KEY)?;
        self.changes.send_replace(Vec::new());
        Ok(())
    }

    /// Turns the cart into products, looking up id entries through the
    /// products API. Ids that fail to load are dropped.
    pub async fn resolve(&self, api: &ProductsApi) -> Vec<Product> {
        let mut products = Vec::new();
        for entry in self.items() {
            let id = match entry {
                CartEntry::Product(product) => {
                    products.push(*product);
                    continue;
                }
                other => other.id().into_owned(),
            };
            match api.get_by_id(&id).await {
                Ok(product) => products.push(product),
                Err(e) => tracing::warn!("Dropping cart item {}: {}", id, e),
            }
        }
        products
    }

    fn write(&self, items: Vec<CartEntry>) -> Result<(), LibError> {
        let raw = serde_json::to_string(&items)?;
        self.storage.set_item(CART_KEY, &raw)?;
        self.changes.send_replace(items);
        Ok(())
    }
}

fn read_entries(storage: &LocalStorage) -> Vec<CartEntry> {
    match storage.get_item(CART_KEY) {
        Ok(Some(raw)) => parse_entries(&raw),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read cart from storage: {}", e);
            Vec::new()
        }
    }
}
