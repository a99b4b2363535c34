//! Domain layer: the composite price tree
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod component;
pub mod error;
pub mod item;
pub mod order;
pub mod package;
pub mod product;
pub mod walk;

pub use component::{Component, ItemId};
pub use error::{DomainError, DomainResult};
pub use item::Item;
pub use order::Order;
pub use package::Package;
pub use product::Product;
pub use walk::{Entry, RenderLines, Walk, INDENT_WIDTH};
