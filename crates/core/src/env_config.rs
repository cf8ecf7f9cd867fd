//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so parallel tests never observe
    // each other's writes.

    #[test]
    fn test_env_parse_valid_port() {
        let var_name = "ANALYTICS_TEST_PORT_VALID_51201";
        unsafe { std::env::set_var(var_name, "8080") };
        let result: u16 = env_parse_with_default(var_name, 5050);
        assert_eq!(result, 8080);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_trims_whitespace() {
        let var_name = "ANALYTICS_TEST_PORT_PADDED_51202";
        unsafe { std::env::set_var(var_name, " 9000\n") };
        let result: u16 = env_parse_with_default(var_name, 5050);
        assert_eq!(result, 9000);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_out_of_range_port() {
        let var_name = "ANALYTICS_TEST_PORT_RANGE_51203";
        unsafe { std::env::set_var(var_name, "70000") };
        let result: u16 = env_parse_with_default(var_name, 5050);
        assert_eq!(result, 5050);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "ANALYTICS_TEST_PORT_MISSING_51204";
        unsafe { std::env::remove_var(var_name) };
        let result: u16 = env_parse_with_default(var_name, 5050);
        assert_eq!(result, 5050);
    }

    #[test]
    fn test_env_parse_empty_value() {
        let var_name = "ANALYTICS_TEST_PORT_EMPTY_51205";
        unsafe { std::env::set_var(var_name, "") };
        let result: u16 = env_parse_with_default(var_name, 5050);
        assert_eq!(result, 5050);
        unsafe { std::env::remove_var(var_name) };
    }
}
