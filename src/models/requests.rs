use super::common::{Amount, Credential, Currency, TransactionReference};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque merchant metadata, forwarded to the gateway as-is.
pub type Meta = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    #[serde(rename = "phonenumber", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Customer {
    pub fn new<T: Into<String>>(email: T) -> Self {
        Customer {
            email: email.into(),
            phone: None,
            name: None,
        }
    }
}

/// Display hints for the hosted payment page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customizations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Split-payment routing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccount {
    pub id: String,
    #[serde(rename = "transaction_split_ratio", skip_serializing_if = "Option::is_none")]
    pub split_ratio: Option<u32>,
    #[serde(rename = "transaction_charge_type", skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
    #[serde(rename = "transaction_charge", skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
}

impl SubAccount {
    pub fn new<T: Into<String>>(id: T) -> Self {
        SubAccount {
            id: id.into(),
            split_ratio: None,
            charge_type: None,
            charge: None,
        }
    }
}

/// Everything needed to start one hosted payment.
#[derive(Debug, Clone)]
pub struct InitializationRequest {
    pub credential: Credential,
    pub amount: Amount,
    pub currency: Option<Currency>,
    pub redirect_url: String,
    pub transaction_reference: TransactionReference,
    pub customer: Customer,
    pub customizations: Option<Customizations>,
    pub payment_options: Option<String>,
    pub payment_plan: Option<u64>,
    pub integrity_hash: Option<String>,
    pub sub_accounts: Option<Vec<SubAccount>>,
    pub meta: Option<Meta>,
}

impl InitializationRequest {
    pub fn new<C, U, R>(
        credential: C,
        amount: Amount,
        redirect_url: U,
        transaction_reference: R,
        customer: Customer,
    ) -> Self
    where
        C: Into<Credential>,
        U: Into<String>,
        R: Into<TransactionReference>,
    {
        InitializationRequest {
            credential: credential.into(),
            amount,
            currency: None,
            redirect_url: redirect_url.into(),
            transaction_reference: transaction_reference.into(),
            customer,
            customizations: None,
            payment_options: None,
            payment_plan: None,
            integrity_hash: None,
            sub_accounts: None,
            meta: None,
        }
    }

    pub fn with_currency<T: Into<Currency>>(mut self, currency: T) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_customizations(mut self, customizations: Customizations) -> Self {
        self.customizations = Some(customizations);
        self
    }

    pub fn with_payment_options<T: Into<String>>(mut self, options: T) -> Self {
        self.payment_options = Some(options.into());
        self
    }

    pub fn with_payment_plan(mut self, plan: u64) -> Self {
        self.payment_plan = Some(plan);
        self
    }

    pub fn with_integrity_hash<T: Into<String>>(mut self, hash: T) -> Self {
        self.integrity_hash = Some(hash.into());
        self
    }

    pub fn with_sub_accounts(mut self, sub_accounts: Vec<SubAccount>) -> Self {
        self.sub_accounts = Some(sub_accounts);
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Separates the bearer credential from the JSON body. The body view has
    /// no credential field, so it cannot leak into the serialized payload.
    pub fn split(&self) -> (&Credential, RequestBody<'_>) {
        let body = RequestBody {
            amount: self.amount,
            currency: self.currency.as_ref(),
            integrity_hash: self.integrity_hash.as_deref(),
            payment_options: self.payment_options.as_deref(),
            payment_plan: self.payment_plan,
            redirect_url: &self.redirect_url,
            subaccounts: self.sub_accounts.as_deref(),
            tx_ref: &self.transaction_reference,
            customer: &self.customer,
            meta: self.meta.as_ref(),
            customizations: self.customizations.as_ref(),
        };
        (&self.credential, body)
    }
}

/// Wire body of the standard initialization call.
#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'a Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity_hash: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<u64>,
    pub redirect_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subaccounts: Option<&'a [SubAccount]>,
    pub tx_ref: &'a TransactionReference,
    pub customer: &'a Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<&'a Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizations: Option<&'a Customizations>,
}
