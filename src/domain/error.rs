//! Domain-level errors (no external dependencies)

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain errors represent order-building rule violations.
/// The plain constructors never produce them; only the checked ones do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("negative amount for '{item}': {amount}")]
    NegativeAmount { item: String, amount: Decimal },

    /// `index` is the position among the siblings; `parent` is `None` at top level.
    #[error(
        "blank item name at position {index} in {}",
        .parent.as_deref().map_or("the order".to_string(), |p| format!("'{}'", p))
    )]
    BlankName {
        parent: Option<String>,
        index: usize,
    },

    #[error("amount overflow at '{item}'")]
    AmountOverflow { item: String },
}

impl DomainError {
    /// Attach the sibling position to a `BlankName`; other variants pass through.
    pub fn located(self, parent: Option<&str>, index: usize) -> Self {
        match self {
            DomainError::BlankName { .. } => DomainError::BlankName {
                parent: parent.map(str::to_string),
                index,
            },
            other => other,
        }
    }
}

/// Result type for checked domain construction.
pub type DomainResult<T> = Result<T, DomainError>;

/// Rejects blank names and amounts below zero.
///
/// A blank name is reported at top-level position 0; callers that know the
/// real position use `DomainError::located`.
pub(crate) fn validate(name: &str, amount: Decimal) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::BlankName {
            parent: None,
            index: 0,
        });
    }
    if amount < Decimal::ZERO {
        return Err(DomainError::NegativeAmount {
            item: name.to_string(),
            amount,
        });
    }
    Ok(())
}
