//! orderbox: gift-boxed orders as a composite price tree
//!
//! Products are packed into packages, packages nest inside packages, and an
//! [`Order`](domain::Order) sums and lists whatever it holds.
//!
//! ```
//! use orderbox::domain::{Component, Order, Package, Product};
//! use rust_decimal::Decimal;
//!
//! let small_box = Package::new("Small box", Decimal::new(50, 0))
//!     .with_child(Product::new("Smartphone", Decimal::new(50_000, 0)))
//!     .with_child(Product::new("Case", Decimal::new(1_200, 0)));
//! assert_eq!(small_box.total_price(), Decimal::new(51_250, 0));
//!
//! let mut order = Order::new();
//! order.add_item(small_box);
//! assert_eq!(order.render().count(), 3);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
