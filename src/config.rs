use crate::models::common::Currency;
use lazy_static::lazy_static;
use log::debug;
use std::collections::BTreeSet;

/// Production endpoint for the standard (hosted page) payment flow.
pub const STANDARD_URL: &str = "https://api.flutterwave.com/v3/payments";

/// Environment variable overriding [`STANDARD_URL`].
pub const STANDARD_URL_ENV: &str = "FLUTTERWAVE_STANDARD_URL";

lazy_static! {
    static ref DEFAULT_CURRENCIES: BTreeSet<Currency> = [
        "AUD", "BIF", "CDF", "CAD", "CVE", "EUR", "GBP", "GHS", "GMD", "GNF", "KES", "LRD",
        "MWK", "MZN", "NGN", "RWF", "SLL", "STD", "TZS", "UGX", "USD", "XAF", "XOF", "ZAR",
        "ZMK", "ZMW", "ZWD",
    ]
    .iter()
    .map(Currency::new)
    .collect();
}

/// Currencies the gateway is currently known to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAllowList(BTreeSet<Currency>);

impl CurrencyAllowList {
    pub fn new<I, C>(codes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Currency>,
    {
        CurrencyAllowList(codes.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, currency: &Currency) -> bool {
        self.0.contains(currency)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.0.iter()
    }
}

impl Default for CurrencyAllowList {
    fn default() -> Self {
        CurrencyAllowList(DEFAULT_CURRENCIES.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerConfig {
    pub endpoint: String,
    pub currencies: CurrencyAllowList,
}

impl Default for InitializerConfig {
    fn default() -> Self {
        InitializerConfig {
            endpoint: STANDARD_URL.to_string(),
            currencies: CurrencyAllowList::default(),
        }
    }
}

impl InitializerConfig {
    /// Loads `.env` if present and applies `FLUTTERWAVE_STANDARD_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = Self::default();
        match std::env::var(STANDARD_URL_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => {
                debug!("Using endpoint override from {}", STANDARD_URL_ENV);
                config.with_endpoint(endpoint.trim())
            }
            _ => config,
        }
    }

    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_currencies(mut self, currencies: CurrencyAllowList) -> Self {
        self.currencies = currencies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_standard_endpoint() {
        let config = InitializerConfig::default();
        assert_eq!(config.endpoint, STANDARD_URL);
        assert!(config.currencies.contains(&Currency::new("NGN")));
        assert!(config.currencies.contains(&Currency::new("usd")));
        assert!(!config.currencies.contains(&Currency::new("JPY")));
        assert_eq!(config.currencies.iter().count(), 27);
    }

    #[test]
    fn custom_allow_list_replaces_default() {
        let config = InitializerConfig::default()
            .with_endpoint("http://localhost:9000/v3/payments")
            .with_currencies(CurrencyAllowList::new(["JPY"]));
        assert_eq!(config.endpoint, "http://localhost:9000/v3/payments");
        assert!(config.currencies.contains(&Currency::new("JPY")));
        assert!(!config.currencies.contains(&Currency::new("NGN")));
    }
}
