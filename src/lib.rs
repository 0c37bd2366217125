//! Client for the hosted-payment initialization call of the Flutterwave
//! standard flow: send the payment options, get back the link the payer has
//! to open.
//!
//! ```no_run
//! use flutterwave_init::{Amount, Customer, InitializationRequest, PaymentInitializer};
//!
//! # async fn run() -> Result<(), flutterwave_init::InitializationFailure> {
//! let request = InitializationRequest::new(
//!     "FLWSECK_TEST-xxxx",
//!     Amount::try_from(1000u64)?,
//!     "https://shop.example/payments/callback",
//!     "order-1234",
//!     Customer::new("payer@example.com"),
//! )
//! .with_currency("NGN");
//!
//! let link = PaymentInitializer::default().initialize(&request, None).await?;
//! println!("redirect the payer to {link}");
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod config;
pub mod models;
pub mod services;

pub use cancel::{AbortController, AbortSignal};
pub use config::{CurrencyAllowList, InitializerConfig, STANDARD_URL};
pub use models::common::{Amount, Credential, Currency, TransactionReference};
pub use models::failure::{FieldError, InitializationFailure};
pub use models::requests::{Customer, Customizations, InitializationRequest, Meta, SubAccount};
pub use models::responses::{RemoteResponse, ResponseData, ResponseStatus};
pub use services::initializer::{initialize, PaymentInitializer};
pub use services::response_parser::interpret;
