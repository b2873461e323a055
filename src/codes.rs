use serde::Serialize;

pub const CRYPTO_CONNECTION_ERROR: &str = "CryptoConnectionError";
pub const SUSPENDED_CURRENCY: &str = "SuspendedCurrency";
pub const SUSPENDED_DEPOSIT: &str = "SuspendedDeposit";

/// Deposit error codes with a dedicated presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositErrorCode {
    CryptoConnectionError,
    SuspendedCurrency,
    SuspendedDeposit,
}

impl DepositErrorCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            CRYPTO_CONNECTION_ERROR => Some(Self::CryptoConnectionError),
            SUSPENDED_CURRENCY => Some(Self::SuspendedCurrency),
            SUSPENDED_DEPOSIT => Some(Self::SuspendedDeposit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CryptoConnectionError => CRYPTO_CONNECTION_ERROR,
            Self::SuspendedCurrency => SUSPENDED_CURRENCY,
            Self::SuspendedDeposit => SUSPENDED_DEPOSIT,
        }
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            Self::CryptoConnectionError => ErrorKind::Maintenance,
            Self::SuspendedCurrency => ErrorKind::CurrencySuspended,
            Self::SuspendedDeposit => ErrorKind::DepositSuspended,
        }
    }

    pub fn all_codes() -> &'static [&'static str] {
        &[
            CRYPTO_CONNECTION_ERROR,
            SUSPENDED_CURRENCY,
            SUSPENDED_DEPOSIT,
        ]
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Maintenance,
    CurrencySuspended,
    DepositSuspended,
    Unclassified,
}

impl ErrorKind {
    /// Unknown and empty codes are `Unclassified`.
    pub fn of(code: &str) -> Self {
        DepositErrorCode::from_code(code).map_or(Self::Unclassified, DepositErrorCode::kind)
    }

    /// Whether the user is offered a recovery action for this kind.
    pub fn is_actionable(self) -> bool {
        matches!(self, Self::Unclassified)
    }
}
