/// Centralized field naming utilities
///
/// Provides consistent field names across the report and all plot functions.
/// Get the standard field name for a given index
///
/// # Arguments
/// * `index` - Field index (0=Near, 1=Far)
///
/// # Returns
/// Static string slice with the field name
///
/// # Panics
/// Panics if index is greater than 1
#[allow(dead_code)]
pub fn field_name(index: usize) -> &'static str {
    match index {
        0 => "Near",
        1 => "Far",
        _ => panic!(
            "Invalid field index: {}. Expected 0 (Near) or 1 (Far)",
            index
        ),
    }
}

/// Get all field names as a static array
pub const FIELD_NAMES: [&str; 2] = ["Near", "Far"];

/// Number of compared fields
pub const FIELD_COUNT: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(field_name(0), "Near");
        assert_eq!(field_name(1), "Far");
    }

    #[test]
    #[should_panic(expected = "Invalid field index")]
    fn test_field_name_panic() {
        field_name(2);
    }

    #[test]
    fn test_field_names_constant() {
        assert_eq!(FIELD_NAMES[0], "Near");
        assert_eq!(FIELD_NAMES[1], "Far");
        assert_eq!(FIELD_NAMES.len(), FIELD_COUNT);
    }
}
