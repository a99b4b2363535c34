//! Pre-order traversal of an item forest and the indented listing built on it.

use rust_decimal::Decimal;

use crate::domain::item::Item;

/// Spaces per nesting level in rendered lines.
pub const INDENT_WIDTH: usize = 2;

/// A visited item together with its nesting depth (0 for top-level items).
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub depth: usize,
    pub item: &'a Item,
}

impl Entry<'_> {
    /// Indented description of the item, amounts formatted by `amount`.
    pub fn render_with<F>(&self, amount: F) -> String
    where
        F: Fn(Decimal) -> String,
    {
        format!(
            "{:indent$}{}",
            "",
            self.item.describe(amount),
            indent = self.depth * INDENT_WIDTH
        )
    }

    /// Indented description with plain decimal amounts.
    pub fn render(&self) -> String {
        self.render_with(|d| d.to_string())
    }
}

/// Depth-first, pre-order iterator over items and their descendants.
///
/// Only reads children through `Item::children`, never package internals.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<Entry<'a>>,
}

impl<'a> Walk<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        // Push in reverse so the first item is popped first
        let stack = items
            .iter()
            .rev()
            .map(|item| Entry { depth: 0, item })
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        for child in entry.item.children().iter().rev() {
            self.stack.push(Entry {
                depth: entry.depth + 1,
                item: child,
            });
        }
        Some(entry)
    }
}

/// Lazy listing of an item forest, one line per item.
///
/// Cloning yields an independent iterator starting from the same position.
#[derive(Debug, Clone)]
pub struct RenderLines<'a> {
    walk: Walk<'a>,
}

impl<'a> RenderLines<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self {
            walk: Walk::new(items),
        }
    }
}

impl Iterator for RenderLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|entry| entry.render())
    }
}
