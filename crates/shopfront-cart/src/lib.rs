//! Client-side shopping cart: canonical line-item keys, the quantity
//! mapping and its mutation rules, durable whole-value persistence, and the
//! derived cart panel view.

pub mod cart;
pub mod error;
pub mod key;
pub mod store;
pub mod view;

pub use cart::Cart;
pub use error::CartError;
pub use key::CartKey;
pub use store::{CartStore, CART_STORAGE_FILE};
pub use view::{CartLine, CartView};
