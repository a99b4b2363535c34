use std::fmt;

use rust_decimal::Decimal;

use crate::domain::component::{Component, ItemId};
use crate::domain::package::Package;
use crate::domain::product::Product;

/// A node of the price tree: either a product or a package.
#[derive(Debug)]
pub enum Item {
    Product(Product),
    Package(Package),
}

impl Item {
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Item::Product(product) => Some(product),
            Item::Package(_) => None,
        }
    }

    pub fn as_package(&self) -> Option<&Package> {
        match self {
            Item::Package(package) => Some(package),
            Item::Product(_) => None,
        }
    }

    pub fn as_package_mut(&mut self) -> Option<&mut Package> {
        match self {
            Item::Package(package) => Some(package),
            Item::Product(_) => None,
        }
    }

    /// Direct children; always empty for a product.
    pub fn children(&self) -> &[Item] {
        match self {
            Item::Package(package) => package.children(),
            Item::Product(_) => &[],
        }
    }

    /// One-line description with amounts formatted by `amount`.
    ///
    /// Packages list packaging, contents and total; products list their price.
    pub fn describe<F>(&self, amount: F) -> String
    where
        F: Fn(Decimal) -> String,
    {
        match self {
            Item::Package(package) => format!(
                "{} (packaging: {}, contents: {}, total: {})",
                package.name(),
                amount(package.own_price()),
                amount(package.contents_price()),
                amount(package.total_price()),
            ),
            Item::Product(product) => {
                format!("{}: {}", product.name(), amount(product.price()))
            }
        }
    }
}

impl Component for Item {
    fn id(&self) -> ItemId {
        match self {
            Item::Product(product) => product.id(),
            Item::Package(package) => package.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Item::Product(product) => product.name(),
            Item::Package(package) => package.name(),
        }
    }

    fn total_price(&self) -> Decimal {
        match self {
            Item::Product(product) => product.total_price(),
            Item::Package(package) => package.total_price(),
        }
    }

    fn own_price(&self) -> Decimal {
        match self {
            Item::Product(product) => product.own_price(),
            Item::Package(package) => package.own_price(),
        }
    }

    fn is_composite(&self) -> bool {
        matches!(self, Item::Package(_))
    }
}

impl From<Product> for Item {
    fn from(product: Product) -> Self {
        Item::Product(product)
    }
}

impl From<Package> for Item {
    fn from(package: Package) -> Self {
        Item::Package(package)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(|d| d.to_string()))
    }
}
