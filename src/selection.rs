//! Controlled payment-token selection.
//!
//! The purchase flow lets a user pick which catalog token to pay with. The
//! selector here is deliberately dumb: it owns no selection state of its
//! own. The caller supplies the current value, rows are derived from the
//! catalog on demand, and a pick is forwarded through the change sink for
//! the caller to act on. What the selector does guarantee is membership:
//! neither construction nor a forwarded pick can ever introduce an address
//! from outside the active catalog.

use alloy::primitives::Address;
use serde::Serialize;
use thiserror::Error;

use crate::tokens::TokenCatalog;

/// Rejections produced by [`PaymentTokenSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The address is not a member of the active payment catalog.
    #[error("token {0} is not in the payment catalog")]
    NotInCatalog(Address),
}

/// One rendered option row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOption {
    pub address: Address,
    /// Ticker symbol, with the native asset annotated: `"ETH (native)"`.
    pub label: String,
    /// True for the row matching the current value.
    pub selected: bool,
}

/// Controlled selection over one network's token catalog.
pub struct PaymentTokenSelector<F: FnMut(Address)> {
    catalog: TokenCatalog,
    value: Address,
    on_change: F,
    disabled: bool,
}

impl<F: FnMut(Address)> PaymentTokenSelector<F> {
    /// Build a selector over `catalog` with `value` currently selected.
    ///
    /// `value` must be a catalog member.
    pub fn new(catalog: TokenCatalog, value: Address, on_change: F) -> Result<Self, SelectionError> {
        if !catalog.contains(value) {
            return Err(SelectionError::NotInCatalog(value));
        }
        Ok(Self {
            catalog,
            value,
            on_change,
            disabled: false,
        })
    }

    /// Disable or enable interaction. Disabled selectors suppress picks.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The currently selected token address. Always a catalog member.
    pub fn value(&self) -> Address {
        self.value
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Option rows in catalog order, one marked selected.
    pub fn options(&self) -> Vec<TokenOption> {
        self.catalog
            .iter()
            .map(|token| TokenOption {
                address: token.address,
                label: if token.is_native {
                    format!("{} (native)", token.symbol)
                } else {
                    token.symbol.clone()
                },
                selected: token.address == self.value,
            })
            .collect()
    }

    /// Forward a user's pick through the change sink.
    ///
    /// Membership is checked before anything else: an address outside the
    /// catalog is rejected and never reaches the sink. On a disabled
    /// selector a valid pick is suppressed without error and the sink does
    /// not fire.
    pub fn pick(&mut self, address: Address) -> Result<(), SelectionError> {
        if !self.catalog.contains(address) {
            return Err(SelectionError::NotInCatalog(address));
        }
        if self.disabled {
            return Ok(());
        }
        (self.on_change)(address);
        Ok(())
    }
}
