/// Custom actions for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryAction {
    /// Flips `in_stock`. The result is the new value.
    ToggleStock,
}
