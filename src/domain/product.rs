use rust_decimal::Decimal;

use crate::domain::component::{Component, ItemId};
use crate::domain::error::{validate, DomainResult};

/// Leaf of the price tree: a single product with a fixed price.
#[derive(Debug)]
pub struct Product {
    id: ItemId,
    name: String,
    price: Decimal,
}

impl Product {
    /// Amounts are not validated here, see `try_new`.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            price,
        }
    }

    /// Like `new`, but rejects a blank name or a negative price.
    pub fn try_new(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        let name = name.into();
        validate(&name, price)?;
        Ok(Self::new(name, price))
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl Component for Product {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> Decimal {
        self.price
    }

    fn own_price(&self) -> Decimal {
        self.price
    }
}
