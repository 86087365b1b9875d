//! Durable cart storage: load at startup, whole-value overwrite on every
//! mutation.

use std::fs;
use std::path::{Path, PathBuf};

use shopfront_core::Catalog;

use crate::cart::Cart;
use crate::error::CartError;
use crate::key::CartKey;
use crate::view::CartView;

/// Storage file name, matching the original client storage key.
pub const CART_STORAGE_FILE: &str = "cart_v1.json";

/// Owns the cart and its storage path — the single owner responsible for
/// persisting after each mutation and for deriving the visible panel.
///
/// Each write replaces the whole file; there are no partial or merged
/// writes and no coordination across processes (last writer wins, as with
/// the original's single-tab storage model).
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    path: PathBuf,
}

impl CartStore {
    /// Opens the cart under `state_dir`, creating the directory if needed.
    ///
    /// A missing file is an empty cart. A file that does not parse is
    /// treated as empty with a warning — a corrupt cart must not take the
    /// whole client down.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Io`] if the directory cannot be created or the
    /// file exists but cannot be read.
    pub fn open(state_dir: &Path) -> Result<Self, CartError> {
        fs::create_dir_all(state_dir).map_err(|e| CartError::Io {
            path: state_dir.to_path_buf(),
            source: e,
        })?;
        let path = state_dir.join(CART_STORAGE_FILE);
        let cart = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Cart>(&raw) {
                Ok(mut cart) => {
                    cart.prune_zero_quantities();
                    cart
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "stored cart is unreadable, starting empty"
                    );
                    Cart::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Cart::new(),
            Err(err) => {
                return Err(CartError::Io {
                    path,
                    source: err,
                })
            }
        };
        Ok(Self { cart, path })
    }

    /// Adds units of a line item and persists.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the write-back fails; the in-memory cart
    /// keeps the mutation either way.
    pub fn add(&mut self, key: CartKey, quantity: u32) -> Result<(), CartError> {
        self.cart.add(key, quantity);
        self.persist()
    }

    /// Applies a signed quantity delta and persists.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the write-back fails.
    pub fn change_quantity(&mut self, key: &CartKey, delta: i64) -> Result<(), CartError> {
        self.cart.change_quantity(key, delta);
        self.persist()
    }

    /// Removes a line item and persists.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the write-back fails.
    pub fn remove(&mut self, key: &CartKey) -> Result<(), CartError> {
        self.cart.remove(key);
        self.persist()
    }

    /// Empties the cart and persists.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if the write-back fails.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();
        self.persist()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derives the visible cart panel against the currently loaded catalog.
    #[must_use]
    pub fn view(&self, catalog: &Catalog) -> CartView {
        CartView::derive(&self.cart, catalog)
    }

    fn persist(&self) -> Result<(), CartError> {
        let json = serde_json::to_string(&self.cart)?;
        fs::write(&self.path, json).map_err(|e| CartError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_on_empty_dir_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CartStore::open(dir.path()).expect("open should succeed");
        assert!(store.cart().is_empty());
        // The file only appears after the first mutation.
        assert!(!dir.path().join(CART_STORAGE_FILE).exists());
    }

    #[test]
    fn mutations_persist_and_reload_identically() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut store = CartStore::open(dir.path()).expect("open should succeed");
        store
            .add(CartKey::listing(1, 10), 2)
            .expect("add should persist");
        store
            .add(CartKey::offer("991"), 1)
            .expect("add should persist");

        let reloaded = CartStore::open(dir.path()).expect("reopen should succeed");
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.cart().quantity(&CartKey::listing(1, 10)), 2);
        assert_eq!(reloaded.cart().quantity(&CartKey::offer("991")), 1);
    }

    #[test]
    fn stored_file_is_the_flat_object_format() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut store = CartStore::open(dir.path()).expect("open should succeed");
        store
            .add(CartKey::listing(1, 10), 2)
            .expect("add should persist");

        let raw = fs::read_to_string(dir.path().join(CART_STORAGE_FILE)).expect("file exists");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value, serde_json::json!({ "1_10": 2 }));
    }

    #[test]
    fn clear_persists_an_empty_object() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut store = CartStore::open(dir.path()).expect("open should succeed");
        store
            .add(CartKey::listing(1, 10), 2)
            .expect("add should persist");
        store.clear().expect("clear should persist");

        let raw = fs::read_to_string(dir.path().join(CART_STORAGE_FILE)).expect("file exists");
        assert_eq!(raw, "{}");

        let reloaded = CartStore::open(dir.path()).expect("reopen should succeed");
        assert!(reloaded.cart().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CART_STORAGE_FILE), "{not json").expect("write fixture");

        let store = CartStore::open(dir.path()).expect("open should succeed");
        assert!(store.cart().is_empty());
    }

    #[test]
    fn legacy_zero_quantities_are_pruned_on_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CART_STORAGE_FILE),
            r#"{"1_10": 2, "2_20": 0}"#,
        )
        .expect("write fixture");

        let store = CartStore::open(dir.path()).expect("open should succeed");
        assert_eq!(store.cart().quantity(&CartKey::listing(1, 10)), 2);
        assert!(!store.cart().contains(&CartKey::listing(2, 20)));
    }

    #[test]
    fn loads_mixed_key_schemes_from_one_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CART_STORAGE_FILE),
            r#"{"1_10": 2, "991": 1}"#,
        )
        .expect("write fixture");

        let store = CartStore::open(dir.path()).expect("open should succeed");
        assert_eq!(store.cart().quantity(&CartKey::listing(1, 10)), 2);
        assert_eq!(store.cart().quantity(&CartKey::offer("991")), 1);
    }
}
