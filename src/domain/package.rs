use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::component::{Component, ItemId};
use crate::domain::error::{validate, DomainResult};
use crate::domain::item::Item;

/// Container of the price tree: a box with its own packaging cost.
///
/// Children are owned: adding an item moves it into the package, so an item
/// sits in at most one package and a package can never contain itself.
#[derive(Debug)]
pub struct Package {
    id: ItemId,
    name: String,
    packaging_cost: Decimal,
    children: Vec<Item>,
}

impl Package {
    /// Amounts are not validated here, see `try_new`.
    pub fn new(name: impl Into<String>, packaging_cost: Decimal) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            packaging_cost,
            children: Vec::new(),
        }
    }

    /// Package without packaging cost.
    pub fn unpriced(name: impl Into<String>) -> Self {
        Self::new(name, Decimal::ZERO)
    }

    /// Like `new`, but rejects a blank name or a negative packaging cost.
    pub fn try_new(name: impl Into<String>, packaging_cost: Decimal) -> DomainResult<Self> {
        let name = name.into();
        validate(&name, packaging_cost)?;
        Ok(Self::new(name, packaging_cost))
    }

    /// Appends `child` and returns its id for later removal.
    #[instrument(level = "trace", skip_all, fields(package = %self.name))]
    pub fn add_child(&mut self, child: impl Into<Item>) -> ItemId {
        let child = child.into();
        let id = child.id();
        debug!(child = child.name(), "add");
        self.children.push(child);
        id
    }

    /// Chaining form of `add_child`.
    pub fn with_child(mut self, child: impl Into<Item>) -> Self {
        self.add_child(child);
        self
    }

    /// Takes the direct child with `id` out of the package.
    ///
    /// Returns `None` and leaves the package untouched if there is no such child.
    #[instrument(level = "trace", skip(self), fields(package = %self.name))]
    pub fn remove_child(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.children.iter().position(|c| c.id() == id)?;
        Some(self.children.remove(pos))
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of the children's total prices, packaging excluded.
    pub fn contents_price(&self) -> Decimal {
        self.children.iter().map(Component::total_price).sum()
    }
}

impl Component for Package {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> Decimal {
        self.packaging_cost + self.contents_price()
    }

    fn own_price(&self) -> Decimal {
        self.packaging_cost
    }

    fn is_composite(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Product};

    fn rub(amount: i64) -> Decimal {
        Decimal::new(amount, 0)
    }

    #[test]
    fn given_empty_package_when_pricing_then_total_is_packaging() {
        let package = Package::new("Envelope", rub(30));
        assert_eq!(package.total_price(), rub(30));
        assert_eq!(package.contents_price(), Decimal::ZERO);
        assert!(package.is_empty());
        assert!(package.is_composite());
    }

    #[test]
    fn given_unpriced_package_when_pricing_then_only_contents_count() {
        let package = Package::unpriced("Bag").with_child(Product::new("Pen", rub(40)));
        assert_eq!(package.own_price(), Decimal::ZERO);
        assert_eq!(package.total_price(), rub(40));
    }

    #[test]
    fn given_child_when_removed_then_returned_and_order_kept() {
        let mut package = Package::new("Box", rub(10));
        let a = package.add_child(Product::new("A", rub(1)));
        let b = package.add_child(Product::new("B", rub(2)));
        let c = package.add_child(Product::new("C", rub(3)));

        let removed = package.remove_child(b).expect("child b present");
        assert_eq!(removed.name(), "B");

        let ids: Vec<_> = package.children().iter().map(Component::id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn given_unknown_id_when_removing_then_noop() {
        let mut package = Package::new("Box", rub(10)).with_child(Product::new("A", rub(1)));
        let stranger = Product::new("A", rub(1));

        assert!(package.remove_child(stranger.id()).is_none());
        assert_eq!(package.len(), 1);
    }

    #[test]
    fn given_negative_packaging_when_checked_then_rejected() {
        let result = Package::try_new("Crate", Decimal::new(-125, 2));
        assert!(matches!(
            result,
            Err(DomainError::NegativeAmount { ref item, amount })
                if item == "Crate" && amount == Decimal::new(-125, 2)
        ));
    }

    #[test]
    fn given_valid_packaging_when_checked_then_built_empty() {
        let package = Package::try_new("Crate", Decimal::ZERO).unwrap();
        assert_eq!(package.total_price(), Decimal::ZERO);
        assert!(package.is_empty());
    }
}
