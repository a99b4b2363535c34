use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::domain::component::{Component, ItemId};
use crate::domain::item::Item;
use crate::domain::product::Product;
use crate::domain::walk::{RenderLines, Walk};

/// Flat, ordered list of top-level items.
#[derive(Debug, Default)]
pub struct Order {
    items: Vec<Item>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level item and returns its id.
    #[instrument(level = "trace", skip_all)]
    pub fn add_item(&mut self, item: impl Into<Item>) -> ItemId {
        let item = item.into();
        let id = item.id();
        debug!(item = item.name(), "add to order");
        self.items.push(item);
        id
    }

    /// Takes the top-level item with `id` out of the order, `None` if absent.
    ///
    /// Items nested inside packages are not searched.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(Component::total_price).sum()
    }

    /// Pre-order traversal of all items with their depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.items)
    }

    /// Indented listing, one line per item; call again to start over.
    pub fn render(&self) -> RenderLines<'_> {
        RenderLines::new(&self.items)
    }

    /// Number of nesting levels: 0 when empty, 1 for bare products.
    pub fn depth(&self) -> usize {
        self.walk().map(|e| e.depth + 1).max().unwrap_or(0)
    }

    /// Every product in the order, packages flattened away, in pre-order.
    pub fn products(&self) -> Vec<&Product> {
        self.walk().filter_map(|e| e.item.as_product()).collect()
    }
}

impl<I: Into<Item>> FromIterator<I> for Order {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
