use crate::classification::localize::{self, Localizer};
use crate::classification::{ActionKind, ContentRecord, RecoveryAction};
use crate::codes::{DepositErrorCode, ErrorKind};
use crate::types::ClassifyContext;

/// Partial replacement of the default record for one known code.
///
/// `None` keeps the default field. Templates interpolate `{{currency}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentOverride {
    pub title: Option<&'static str>,
    pub message: Option<&'static str>,
    pub suppress_action: bool,
}

impl ContentOverride {
    fn apply(
        self,
        mut record: ContentRecord,
        ctx: &ClassifyContext,
        localizer: &dyn Localizer,
    ) -> ContentRecord {
        let values = [("currency", ctx.currency.as_deref().unwrap_or_default())];
        if let Some(title) = self.title {
            record.title = localizer.localize(title, &values);
        }
        if let Some(message) = self.message {
            record.message = localizer.localize(message, &values);
        }
        if self.suppress_action {
            record.action = None;
        }
        record
    }
}

const WALLET_DEPOSITS_UNAVAILABLE: ContentOverride = ContentOverride {
    title: Some(localize::WALLET_DEPOSITS_UNAVAILABLE_TITLE),
    message: Some(localize::WALLET_DEPOSITS_UNAVAILABLE_MESSAGE),
    suppress_action: true,
};

pub fn override_for(code: DepositErrorCode) -> ContentOverride {
    match code {
        DepositErrorCode::CryptoConnectionError => ContentOverride {
            title: Some(localize::MAINTENANCE_IN_PROGRESS),
            message: None,
            suppress_action: true,
        },
        // Both suspension codes share one notice.
        DepositErrorCode::SuspendedCurrency | DepositErrorCode::SuspendedDeposit => {
            WALLET_DEPOSITS_UNAVAILABLE
        }
    }
}

/// The record shown for any code without an override.
pub fn default_record(ctx: &ClassifyContext, localizer: &dyn Localizer) -> ContentRecord {
    ContentRecord {
        kind: ErrorKind::Unclassified,
        title: localizer.localize(localize::SOMETHING_WENT_WRONG, &[]),
        message: ctx.message.clone(),
        action: Some(RecoveryAction {
            label: localizer.localize(localize::REFRESH_PAGE, &[]),
            kind: ActionKind::ReloadPage,
        }),
    }
}

/// Map an error code to display content. Total over all codes: unknown and
/// empty codes produce [`default_record`].
pub fn classify(code: &str, ctx: &ClassifyContext, localizer: &dyn Localizer) -> ContentRecord {
    let record = default_record(ctx, localizer);
    let record = match DepositErrorCode::from_code(code) {
        Some(known) => ContentRecord {
            kind: known.kind(),
            ..override_for(known).apply(record, ctx, localizer)
        },
        None => record,
    };

    tracing::debug!(
        code,
        kind = %record.kind,
        actionable = record.has_action(),
        "classified deposit error"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::localize::DefaultLocalizer;

    fn ctx(message: &str, currency: Option<&str>) -> ClassifyContext {
        ClassifyContext::new(message, currency.map(str::to_string))
    }

    struct UppercaseLocalizer;

    impl Localizer for UppercaseLocalizer {
        fn localize(&self, template: &str, values: &[(&str, &str)]) -> String {
            localize::interpolate(template, values).to_uppercase()
        }
    }

    #[test]
    fn unknown_codes_return_default_record() {
        let c = ctx("server exploded", Some("USD"));
        for code in [
            "UNKNOWN_CODE_123",
            "",
            "cryptoconnectionerror",
            "InvalidToken",
        ] {
            assert_eq!(
                classify(code, &c, &DefaultLocalizer),
                default_record(&c, &DefaultLocalizer),
                "code {code:?} should fall back"
            );
        }
    }

    #[test]
    fn unknown_code_offers_refresh() {
        let record = classify(
            "UNKNOWN_CODE_123",
            &ctx("server exploded", Some("USD")),
            &DefaultLocalizer,
        );
        assert_eq!(record.kind, ErrorKind::Unclassified);
        assert_eq!(record.title, "Something went wrong");
        assert_eq!(record.message, "server exploded");
        assert_eq!(record.button_text(), Some("Refresh page"));
        assert_eq!(record.action.map(|a| a.kind), Some(ActionKind::ReloadPage));
    }

    #[test]
    fn maintenance_keeps_message_and_drops_action() {
        let record = classify(
            "CryptoConnectionError",
            &ctx("x", Some("BTC")),
            &DefaultLocalizer,
        );
        assert_eq!(record.kind, ErrorKind::Maintenance);
        assert_eq!(record.title, "Maintenance in progress");
        assert_eq!(record.message, "x");
        assert!(record.action.is_none());
    }

    #[test]
    fn suspended_codes_interpolate_currency() {
        for code in ["SuspendedCurrency", "SuspendedDeposit"] {
            let c = ctx("m", Some("USD"));
            let record = classify(code, &c, &DefaultLocalizer);
            let default = default_record(&c, &DefaultLocalizer);

            assert!(record.title.contains("USD"), "{code} title");
            assert!(record.message.contains("USD"), "{code} message");
            assert_ne!(record.title, default.title);
            assert_ne!(record.message, default.message);
            assert!(record.action.is_none());
        }
    }

    #[test]
    fn suspended_codes_share_content() {
        let c = ctx("m", Some("ETH"));
        let currency = classify("SuspendedCurrency", &c, &DefaultLocalizer);
        let deposit = classify("SuspendedDeposit", &c, &DefaultLocalizer);

        assert_eq!(
            currency.title,
            "ETH Wallet deposits are temporarily unavailable"
        );
        assert_eq!(currency.title, deposit.title);
        assert_eq!(currency.message, deposit.message);
        assert_eq!(currency.kind, ErrorKind::CurrencySuspended);
        assert_eq!(deposit.kind, ErrorKind::DepositSuspended);
    }

    #[test]
    fn missing_currency_degrades_to_empty() {
        let record = classify("SuspendedCurrency", &ctx("m", None), &DefaultLocalizer);
        assert_eq!(record.title, " Wallet deposits are temporarily unavailable");
        assert_eq!(
            record.message,
            "Due to system maintenance, deposits with your  Wallet are unavailable at the moment. Please try again later."
        );
    }

    #[test]
    fn classification_is_repeatable() {
        let c = ctx("x", Some("LTC"));
        for code in ["CryptoConnectionError", "SuspendedDeposit", "Nope"] {
            assert_eq!(
                classify(code, &c, &DefaultLocalizer),
                classify(code, &c, &DefaultLocalizer)
            );
        }
    }

    #[test]
    fn every_known_code_suppresses_action() {
        for code in DepositErrorCode::all_codes() {
            let record = classify(code, &ctx("x", Some("BTC")), &DefaultLocalizer);
            assert!(!record.has_action(), "{code} should not offer an action");
            assert_eq!(record.kind.is_actionable(), record.has_action());
        }
    }

    #[test]
    fn localizer_renders_every_template_field() {
        let record = classify("UNKNOWN", &ctx("raw detail", None), &UppercaseLocalizer);
        assert_eq!(record.title, "SOMETHING WENT WRONG");
        assert_eq!(record.button_text(), Some("REFRESH PAGE"));
        // the server message is never localized
        assert_eq!(record.message, "raw detail");

        let record = classify(
            "SuspendedDeposit",
            &ctx("x", Some("eth")),
            &UppercaseLocalizer,
        );
        assert_eq!(
            record.title,
            "ETH WALLET DEPOSITS ARE TEMPORARILY UNAVAILABLE"
        );
    }
}
