use super::Table;

/// Endpoint and anonymous key for the hosted store, collected once at
/// startup and handed to [`super::StoreClient`] explicitly so tests can
/// substitute their own.
///
/// Both values are baked in at build time. A missing value degrades to an
/// empty string, the client then fails per call instead of panicking at
/// startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        StoreConfig {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        StoreConfig::new(
            option_env!("FITSITE_STORE_URL").unwrap_or(""),
            option_env!("FITSITE_STORE_ANON_KEY").unwrap_or(""),
        )
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// REST endpoint for a table, tolerant of a trailing slash on the
    /// configured url.
    pub fn endpoint(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_endpoint_joins_table_name() {
        let config = StoreConfig::new("https://store.example", "key");
        assert_eq!(
            config.endpoint(Table::DietPlans),
            "https://store.example/rest/v1/diet_plans"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let config = StoreConfig::new("https://store.example/", "key");
        assert_eq!(
            config.endpoint(Table::Programs),
            "https://store.example/rest/v1/programs"
        );
    }

    #[test]
    fn test_missing_values_degrade_to_unconfigured() {
        assert!(!StoreConfig::default().is_configured());
        assert!(!StoreConfig::new("https://store.example", "").is_configured());
        assert!(StoreConfig::new("https://store.example", "key").is_configured());
    }
}
