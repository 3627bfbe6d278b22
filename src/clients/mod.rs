//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient), one per backend area.

pub mod api_client;
pub mod cart_client;
pub mod checkout_client;
pub mod product_client;
pub mod store_client;

pub use api_client::*;
pub use cart_client::*;
pub use checkout_client::*;
pub use product_client::*;
pub use store_client::*;
