use crate::cancel::AbortSignal;
use crate::config::InitializerConfig;
use crate::models::common::Credential;
use crate::models::failure::InitializationFailure;
use crate::models::requests::{InitializationRequest, RequestBody};
use crate::models::responses::RemoteResponse;
use crate::services::response_parser;
use futures_util::future::Aborted;
use lazy_static::lazy_static;
use log::{debug, info};
use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

pub const UNSUPPORTED_CURRENCY: &str = "UNSUPPORTED_CURRENCY";

lazy_static! {
    // Environment is read once, on first use of the free `initialize`.
    static ref DEFAULT_INITIALIZER: PaymentInitializer =
        PaymentInitializer::new(InitializerConfig::from_env());
}

/// Everything that can go wrong between building the request and reading the
/// link. Collapsed into [`InitializationFailure`] before reaching the caller.
#[derive(Error, Debug)]
enum InitError {
    #[error(transparent)]
    Failure(#[from] InitializationFailure),

    #[error("Invalid authorization header: {0}")]
    Header(#[from] InvalidHeaderValue),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("The operation was aborted")]
    Aborted(#[from] Aborted),
}

impl InitError {
    fn kind(&self) -> &'static str {
        match self {
            InitError::Failure(_) => "InitializationFailure",
            InitError::Header(_) => "HeaderError",
            InitError::Http(e) if e.is_timeout() => "TimeoutError",
            InitError::Http(e) if e.is_connect() => "ConnectError",
            InitError::Http(e) if e.is_decode() => "DecodeError",
            InitError::Http(_) => "RequestError",
            InitError::Decode(_) => "DecodeError",
            InitError::Aborted(_) => "AbortError",
        }
    }
}

impl From<InitError> for InitializationFailure {
    fn from(error: InitError) -> Self {
        match error {
            InitError::Failure(failure) => failure,
            other => InitializationFailure::new(other.to_string(), other.kind().to_uppercase()),
        }
    }
}

/// Client for the gateway's standard (hosted page) initialization call.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent initializations.
#[derive(Debug, Clone)]
pub struct PaymentInitializer {
    client: Client,
    config: InitializerConfig,
}

impl PaymentInitializer {
    pub fn new(config: InitializerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Uses a caller-built client, e.g. one configured with a timeout.
    pub fn with_client(client: Client, config: InitializerConfig) -> Self {
        PaymentInitializer { client, config }
    }

    pub fn config(&self) -> &InitializerConfig {
        &self.config
    }

    /// Initializes a hosted payment and resolves to the link the payer must
    /// be sent to. Every failure, local or remote, comes back as an
    /// [`InitializationFailure`].
    pub async fn initialize(
        &self,
        request: &InitializationRequest,
        signal: Option<AbortSignal>,
    ) -> Result<String, InitializationFailure> {
        self.try_initialize(request, signal)
            .await
            .map_err(InitializationFailure::from)
    }

    async fn try_initialize(
        &self,
        request: &InitializationRequest,
        signal: Option<AbortSignal>,
    ) -> Result<String, InitError> {
        self.check_currency(request)?;

        let (credential, body) = request.split();

        info!(
            "Sending payment initialization {} to {}",
            body.tx_ref, self.config.endpoint
        );

        let exchange = self.exchange(credential, &body);
        let response = match signal {
            Some(signal) => signal.wrap(exchange).await??,
            None => exchange.await?,
        };

        info!("Received initialization response for {}", body.tx_ref);
        debug!(
            "Gateway status {:?}, code {:?}",
            response.status, response.code
        );

        Ok(response_parser::interpret(response)?)
    }

    fn check_currency(&self, request: &InitializationRequest) -> Result<(), InitializationFailure> {
        match &request.currency {
            Some(currency) if !self.config.currencies.contains(currency) => {
                Err(InitializationFailure::new(
                    format!("currency {} is not supported", currency),
                    UNSUPPORTED_CURRENCY,
                ))
            }
            _ => Ok(()),
        }
    }

    async fn exchange(
        &self,
        credential: &Credential,
        body: &RequestBody<'_>,
    ) -> Result<RemoteResponse, InitError> {
        let mut authorization = HeaderValue::from_str(&credential.bearer())?;
        authorization.set_sensitive(true);

        let bytes = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .json(body)
            .send()
            .await?
            .bytes()
            .await?;

        Ok(serde_json::from_slice::<RemoteResponse>(&bytes)?)
    }
}

impl Default for PaymentInitializer {
    fn default() -> Self {
        Self::new(InitializerConfig::default())
    }
}

/// Initialization through a process-wide initializer whose configuration is
/// taken from the environment the first time this is called.
pub async fn initialize(
    request: &InitializationRequest,
    signal: Option<AbortSignal>,
) -> Result<String, InitializationFailure> {
    DEFAULT_INITIALIZER.initialize(request, signal).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Amount;
    use crate::models::requests::Customer;

    fn request(currency: &str) -> InitializationRequest {
        InitializationRequest::new(
            "sk_test_1",
            Amount::try_from(1000u64).unwrap(),
            "https://x.test/cb",
            "tx-1",
            Customer::new("a@b.com"),
        )
        .with_currency(currency)
    }

    #[test]
    fn existing_failure_passes_through_unchanged() {
        let failure = InitializationFailure::new("Invalid amount", "INVALID_AMOUNT");
        let normalized = InitializationFailure::from(InitError::from(failure.clone()));
        assert_eq!(normalized, failure);
    }

    #[test]
    fn foreign_errors_use_upper_cased_kind() {
        let aborted = InitializationFailure::from(InitError::from(Aborted));
        assert_eq!(aborted.code, "ABORTERROR");
        assert_eq!(aborted.message, "The operation was aborted");

        let decode_error = serde_json::from_str::<RemoteResponse>("<html>").unwrap_err();
        let decode = InitializationFailure::from(InitError::from(decode_error));
        assert_eq!(decode.code, "DECODEERROR");
        assert!(decode.message.starts_with("Failed to decode gateway response"));
    }

    #[tokio::test]
    async fn unsupported_currency_fails_before_sending() {
        let initializer = PaymentInitializer::new(
            InitializerConfig::default().with_endpoint("http://127.0.0.1:9/unreachable"),
        );
        let failure = initializer
            .initialize(&request("JPY"), None)
            .await
            .unwrap_err();
        assert_eq!(failure.code, UNSUPPORTED_CURRENCY);
    }
}
