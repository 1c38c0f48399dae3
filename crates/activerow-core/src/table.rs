//! Physical table name derivation.

/// Derive a storage identifier from a fully-qualified type name.
///
/// Path and namespace separators (`::`, `/`, `\`) become single underscores,
/// then every character outside `[A-Za-z0-9_-]` is stripped. Pure and
/// deterministic for a given input.
///
/// ```
/// use activerow_core::table::table_name_from;
///
/// assert_eq!(table_name_from(r"App/Model\Order"), "App_Model_Order");
/// assert_eq!(table_name_from("myapp::models::User"), "myapp_models_User");
/// ```
#[must_use]
pub fn table_name_from(type_name: &str) -> String {
    let separated = type_name.replace("::", "_").replace(['/', '\\'], "_");
    separated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_separators_become_underscores() {
        assert_eq!(table_name_from(r"App/Model\Order"), "App_Model_Order");
    }

    #[test]
    fn test_rust_paths_collapse_to_single_underscores() {
        assert_eq!(table_name_from("myapp::models::User"), "myapp_models_User");
    }

    #[test]
    fn test_illegal_characters_are_stripped() {
        assert_eq!(table_name_from("Sp ce!<T>"), "SpceT");
        assert_eq!(table_name_from("audit-log"), "audit-log");
    }

    #[test]
    fn test_deterministic() {
        let a = table_name_from("crate::orders::LineItem");
        let b = table_name_from("crate::orders::LineItem");
        assert_eq!(a, b);
        assert_eq!(a, "crate_orders_LineItem");
    }
}
