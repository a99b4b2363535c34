//! Human-readable order report: header, listing, total.

use termtree::Tree;
use tracing::instrument;

use crate::config::Settings;
use crate::domain::{Item, Order};

pub const TITLE: &str = "Order contents:";
pub const RULE: &str = "==================";

/// Formats an order using the display settings (currency, scale).
#[derive(Debug)]
pub struct OrderReport<'a> {
    order: &'a Order,
    settings: &'a Settings,
}

impl<'a> OrderReport<'a> {
    pub fn new(order: &'a Order, settings: &'a Settings) -> Self {
        Self { order, settings }
    }

    /// Indented listing of every item, one line each.
    pub fn listing(&self) -> Vec<String> {
        self.order
            .walk()
            .map(|entry| entry.render_with(|d| self.settings.format_amount(d)))
            .collect()
    }

    pub fn total_line(&self) -> String {
        format!(
            "Order total: {}",
            self.settings.format_amount(self.order.total_price())
        )
    }

    /// Full report: title, rule, listing, rule, total.
    #[instrument(level = "debug", skip(self))]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![TITLE.to_string(), RULE.to_string()];
        lines.extend(self.listing());
        lines.push(RULE.to_string());
        lines.push(self.total_line());
        lines
    }

    /// The order as a box-drawing tree rooted at the order total.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree(&self) -> Tree<String> {
        Tree::new(self.total_line())
            .with_leaves(self.order.items().iter().map(|i| self.item_tree(i)))
    }

    fn item_tree(&self, item: &Item) -> Tree<String> {
        let label = item.describe(|d| self.settings.format_amount(d));
        Tree::new(label).with_leaves(item.children().iter().map(|c| self.item_tree(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Package, Product};
    use rust_decimal::Decimal;

    #[test]
    fn given_empty_order_when_reporting_then_zero_total() {
        let order = Order::new();
        let settings = Settings::default();
        let lines = OrderReport::new(&order, &settings).lines();
        assert_eq!(lines, vec![TITLE, RULE, RULE, "Order total: 0.00 RUB"]);
    }

    #[test]
    fn given_nested_order_when_building_tree_then_children_nested() {
        let mut order = Order::new();
        order.add_item(
            Package::new("Box", Decimal::new(10, 0))
                .with_child(Product::new("Pen", Decimal::new(40, 0))),
        );
        let settings = Settings::default();
        let tree = OrderReport::new(&order, &settings).to_tree();

        assert_eq!(tree.root, "Order total: 50.00 RUB");
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].leaves[0].root, "Pen: 40.00 RUB");
    }
}
