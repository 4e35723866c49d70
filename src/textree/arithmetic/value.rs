//! Canonical decimal rendering of evaluated values

/// Render a value the way it is written back into text.
///
/// Always shows at least one fractional digit (`5` → `"5.0"`), never uses exponent
/// notation, and otherwise uses the shortest representation that round-trips.
pub fn format_value(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
