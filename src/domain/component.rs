//! The capability shared by every node of the price tree.

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

/// Identity of a node, assigned once at construction.
///
/// Names are for display and may repeat; removal always goes by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price queries available on products, packages and the `Item` sum of both.
///
/// Child management is deliberately absent here: it lives on `Package` only.
pub trait Component {
    fn id(&self) -> ItemId;

    fn name(&self) -> &str;

    /// Own cost plus the total price of every descendant, recomputed on each call.
    fn total_price(&self) -> Decimal;

    /// Cost of this node alone, children excluded.
    fn own_price(&self) -> Decimal;

    fn is_composite(&self) -> bool {
        false
    }
}
