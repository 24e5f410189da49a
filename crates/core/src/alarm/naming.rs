use crate::policy::{AlarmKind, PolicyGeneration};

/// Strips every character outside `[0-9a-zA-Z]`.
///
/// Lossy: `orders-1` and `orders_1` both become `orders1`.
pub fn sanitize(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Returns the template key of the alarm watching `table_name` for `kind`.
pub fn alarm_key(table_name: &str, kind: AlarmKind, generation: PolicyGeneration) -> String {
    format!("{}{}", sanitize(table_name), kind.key_suffix(generation))
}
