/// Rank a machine by the configured region preference (lower is better).
pub fn region_rank(name: &str, description: &str, region_order: &[String]) -> usize {
    preference_rank(name, description, region_order)
}

/// Rank a machine by the configured language preference (lower is better).
pub fn language_rank(name: &str, description: &str, language_order: &[String]) -> usize {
    preference_rank(name, description, language_order)
}

/// Index of the first preferred token found in `"{name} {description}"`.
///
/// An empty preference list ranks everything 0. Machines matching no token
/// rank `order.len() + 1`, behind every explicitly preferred one.
fn preference_rank(name: &str, description: &str, order: &[String]) -> usize {
    if order.is_empty() {
        return 0;
    }
    let text = format!("{name} {description}").to_lowercase();
    order
        .iter()
        .position(|token| text.contains(token.trim().to_lowercase().as_str()))
        .unwrap_or(order.len() + 1)
}
