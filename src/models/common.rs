use super::failure::InitializationFailure;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Bearer secret used to authorize the initialization call.
///
/// Never serialized and redacted from `Debug` output; the only way to read it
/// is [`Credential::secret`], which the initializer uses to build the
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new<T: Into<String>>(value: T) -> Self {
        Credential(value.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Credential::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Credential(value)
    }
}

/// Strictly positive payment amount, sent to the gateway as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub const INVALID_CODE: &'static str = "INVALID_AMOUNT";

    pub fn new(value: Decimal) -> Result<Self, InitializationFailure> {
        if value <= Decimal::ZERO {
            return Err(InitializationFailure::new(
                format!("amount must be positive, got {}", value),
                Self::INVALID_CODE,
            ));
        }
        Ok(Amount(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = InitializationFailure;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl TryFrom<u64> for Amount {
    type Error = InitializationFailure;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Amount::new(Decimal::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let normalized = self.0.normalize();
        // Whole amounts go out as integers so the gateway sees `1000`, not `1000.0`.
        if normalized.scale() == 0 {
            if let Some(whole) = normalized.to_u64() {
                return serializer.serialize_u64(whole);
            }
        }
        match normalized.to_f64() {
            Some(float) => serializer.serialize_f64(float),
            None => Err(serde::ser::Error::custom("amount is not representable as f64")),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept either string or number, like the gateway echoes back
        let value = serde_json::Value::deserialize(deserializer)?;
        let raw = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => return Err(serde::de::Error::custom("Expected string or number")),
        };
        let decimal = Decimal::from_str(raw.trim())
            .or_else(|_| Decimal::from_scientific(raw.trim()))
            .map_err(serde::de::Error::custom)?;
        Amount::new(decimal).map_err(serde::de::Error::custom)
    }
}

/// ISO-4217 style currency code. Always stored upper-cased; whether the
/// gateway accepts it is decided by the configured allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new<T: AsRef<str>>(code: T) -> Self {
        Currency(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Currency::new(s))
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Currency::new(value)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Merchant-side unique identifier of a single payment attempt (`tx_ref`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionReference(String);

impl TransactionReference {
    pub fn new<T: Into<String>>(value: T) -> Self {
        TransactionReference(value.into())
    }

    /// Random reference for callers without their own numbering scheme.
    pub fn generate() -> Self {
        TransactionReference(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransactionReference {
    fn from(value: &str) -> Self {
        TransactionReference::new(value)
    }
}

impl From<String> for TransactionReference {
    fn from(value: String) -> Self {
        TransactionReference(value)
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
