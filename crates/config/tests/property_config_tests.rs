//! Property-based tests for configuration parsing.

use cheatsheet_config::{ColorTheme, ConfigLoader};
use proptest::prelude::*;

proptest! {
    #[test]
    fn theme_keys_parse_in_any_case(index in 0usize..ColorTheme::ALL.len(), upper in any::<bool>()) {
        let theme = ColorTheme::ALL[index];
        let key = if upper { theme.key().to_uppercase() } else { theme.key().to_string() };
        prop_assert_eq!(key.parse::<ColorTheme>(), Ok(theme));
    }

    #[test]
    fn built_reference_urls_end_with_slash(
        host in "[a-z]{1,12}",
        path in proptest::collection::vec("[a-z0-9_]{1,8}", 0..4),
        secure in any::<bool>(),
    ) {
        let scheme = if secure { "https" } else { "http" };
        let url = format!("{}://{}.example/{}", scheme, host, path.join("/"));
        let config = ConfigLoader::new().with_reference_base_url(url).build().unwrap();
        prop_assert!(config.reference_base_url.ends_with('/'));
        prop_assert!(config.reference_base_url.starts_with(scheme));
    }
}
