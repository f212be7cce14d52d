use std::{env, str::FromStr};

/// Parse an `envvar` as `T`. Return `fallback` if env missing or parsing fails.
pub fn parse_env_or<T: FromStr>(envvar: &str, fallback: T) -> T {
    env::var(envvar)
        .map(|s| T::from_str(&s).ok())
        .ok()
        .flatten()
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_or_fallback() {
        let v: u64 = parse_env_or("VAULT_TEST_SURELY_UNSET_ENVVAR", 42);
        assert_eq!(v, 42);
    }

    #[test]
    fn test_parse_env_or_bad_value_falls_back() {
        env::set_var("VAULT_TEST_BAD_NUMBER", "not-a-number");
        let v: u64 = parse_env_or("VAULT_TEST_BAD_NUMBER", 7);
        assert_eq!(v, 7);
    }

    #[test]
    fn test_parse_env_or_reads_value() {
        env::set_var("VAULT_TEST_GOOD_NUMBER", "250");
        let v: u64 = parse_env_or("VAULT_TEST_GOOD_NUMBER", 7);
        assert_eq!(v, 250);
    }
}
