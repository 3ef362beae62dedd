//! Free-text narrowing for the per-status order views.

use crate::model::Order;

/// Case-insensitive substring match over customer name, order id and line-item text,
/// OR-combined. Blank text matches every order.
pub fn matches_search(order: &Order, text: &str) -> bool {
    let query = text.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    order.customer.to_lowercase().contains(&query)
        || order.id.0.to_lowercase().contains(&query)
        || order
            .items
            .iter()
            .any(|item| item.to_lowercase().contains(&query))
}
