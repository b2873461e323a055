use crate::error::Error;

/// A failure reported by the cashier connection, already normalized by the caller.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ErrorInput {
    /// Stable error identifier (e.g. `"SuspendedCurrency"`). Free-form, never validated.
    pub code: String,
    /// Diagnostic text from the origin of the error. Shown verbatim for unclassified codes.
    pub message: String,
    /// Extra structured data some errors carry. Never consulted by classification.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ErrorInput {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Extract the `error` object from a cashier response envelope.
    ///
    /// Expects `{"error": {"code": "...", "message": "..."}, ...}`; other keys are ignored.
    pub fn from_socket_response(response: &serde_json::Value) -> Result<Self, Error> {
        let error = response
            .get("error")
            .filter(|v| v.is_object())
            .ok_or_else(|| Error::Parse {
                reason: "response has no error object".into(),
            })?;

        let code = error
            .get("code")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Parse {
                reason: "error missing code".into(),
            })?
            .to_string();
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Parse {
                reason: format!("error {code} missing message"),
            })?
            .to_string();
        let details = error.get("details").cloned();

        Ok(Self {
            code,
            message,
            details,
        })
    }
}

/// The slice of the active account this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct AccountProjection {
    /// `None` while account data is still loading.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Runtime values a classification may interpolate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyContext {
    pub message: String,
    pub currency: Option<String>,
}

impl ClassifyContext {
    pub fn new(message: impl Into<String>, currency: Option<String>) -> Self {
        Self {
            message: message.into(),
            currency,
        }
    }
}

/// Caller-supplied screen settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Text interpolated in place of the currency while the account has none.
    pub missing_currency: String,
}

impl ScreenConfig {
    pub fn with_missing_currency(placeholder: impl Into<String>) -> Self {
        Self {
            missing_currency: placeholder.into(),
        }
    }

    /// The account currency, or the placeholder when the account has none.
    ///
    /// An empty placeholder leaves the currency unset.
    pub fn resolve_currency(&self, currency: Option<String>) -> Option<String> {
        if currency.is_some() || self.missing_currency.is_empty() {
            return currency;
        }
        Some(self.missing_currency.clone())
    }
}
