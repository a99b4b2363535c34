//! TOML order descriptions
//!
//! ```toml
//! [[items]]
//! kind = "package"
//! name = "Gift wrap"
//! packaging = 500
//!
//! [[items.contents]]
//! kind = "product"
//! name = "Smartwatch"
//! price = "15000"
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Component, DomainError, DomainResult, Item, Order, Package, Product};

/// Parsed order file, not yet validated.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OrderFile {
    pub items: Vec<ItemSpec>,
}

/// One entry of an order file.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemSpec {
    Product {
        name: String,
        price: Decimal,
    },
    Package {
        name: String,
        #[serde(default)]
        packaging: Decimal,
        #[serde(default)]
        contents: Vec<ItemSpec>,
    },
}

impl ItemSpec {
    /// Build the domain item, rejecting blank names, negative amounts and
    /// totals beyond the `Decimal` range.
    pub fn into_item(self) -> DomainResult<Item> {
        self.build(None, 0).map(|(item, _)| item)
    }

    /// Builds the item at `index` under `parent` together with its total price.
    fn build(self, parent: Option<&str>, index: usize) -> DomainResult<(Item, Decimal)> {
        match self {
            ItemSpec::Product { name, price } => {
                let product =
                    Product::try_new(name, price).map_err(|e| e.located(parent, index))?;
                Ok((product.into(), price))
            }
            ItemSpec::Package {
                name,
                packaging,
                contents,
            } => {
                let mut package =
                    Package::try_new(name, packaging).map_err(|e| e.located(parent, index))?;
                let mut total = packaging;
                for (i, spec) in contents.into_iter().enumerate() {
                    let (child, child_total) = spec.build(Some(package.name()), i)?;
                    total = total
                        .checked_add(child_total)
                        .ok_or_else(|| DomainError::AmountOverflow {
                            item: package.name().to_string(),
                        })?;
                    package.add_child(child);
                }
                Ok((package.into(), total))
            }
        }
    }
}

impl OrderFile {
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content = std::fs::read_to_string(path).with_path_context("read order file", path)?;
        Self::parse_named(&content, &path.display().to_string())
    }

    pub fn parse(content: &str) -> ApplicationResult<Self> {
        Self::parse_named(content, "<inline>")
    }

    fn parse_named(content: &str, origin: &str) -> ApplicationResult<Self> {
        let file: Self = toml::from_str(content).map_err(|e| ApplicationError::OrderFormat {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        debug!(origin, items = file.items.len(), "parsed order file");
        Ok(file)
    }

    pub fn into_order(self) -> ApplicationResult<Order> {
        let mut order = Order::new();
        let mut total = Decimal::ZERO;
        for (i, spec) in self.items.into_iter().enumerate() {
            let (item, item_total) = spec.build(None, i)?;
            total = total
                .checked_add(item_total)
                .ok_or_else(|| DomainError::AmountOverflow {
                    item: item.name().to_string(),
                })?;
            order.add_item(item);
        }
        debug!(%total, items = order.len(), "validated order");
        Ok(order)
    }
}
