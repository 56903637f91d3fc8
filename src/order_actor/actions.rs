//! Status transitions for the Order actor.

/// Custom actions for Order entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// pending -> cancelled, returning every item's quantity to stock.
    Cancel,
    /// pending -> completed.
    Complete,
}
