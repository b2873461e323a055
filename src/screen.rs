use crate::classification::localize::Localizer;
use crate::classification::table::classify;
use crate::classification::{ContentRecord, Reloader};
use crate::guard::{LanguageGuard, SessionLanguages};
use crate::types::{AccountProjection, ClassifyContext, ErrorInput, ScreenConfig};

/// Read access to the active wallet account.
pub trait AccountSource {
    /// `None` while the account has not loaded.
    fn active_account(&self) -> Option<AccountProjection>;
}

impl AccountSource for AccountProjection {
    fn active_account(&self) -> Option<AccountProjection> {
        Some(self.clone())
    }
}

impl AccountSource for Option<AccountProjection> {
    fn active_account(&self) -> Option<AccountProjection> {
        self.clone()
    }
}

/// The deposit failure screen: language guard plus classification, one pass per render.
pub struct DepositErrorScreen<'a> {
    accounts: &'a dyn AccountSource,
    localizer: &'a dyn Localizer,
    reloader: &'a dyn Reloader,
    config: ScreenConfig,
    guard: LanguageGuard,
}

impl<'a> DepositErrorScreen<'a> {
    pub fn new(
        accounts: &'a dyn AccountSource,
        localizer: &'a dyn Localizer,
        reloader: &'a dyn Reloader,
    ) -> Self {
        Self {
            accounts,
            localizer,
            reloader,
            config: ScreenConfig::default(),
            guard: LanguageGuard::new(),
        }
    }

    pub fn with_config(mut self, config: ScreenConfig) -> Self {
        self.config = config;
        self
    }

    fn currency(&self) -> Option<String> {
        let currency = self.accounts.active_account().and_then(|a| a.currency);
        self.config.resolve_currency(currency)
    }

    /// Check session language, then classify `error` against the active account.
    ///
    /// If the guard requests a reload the returned content is still valid, but the
    /// host is expected to tear the screen down.
    pub fn render(&mut self, error: &ErrorInput, languages: &SessionLanguages) -> ContentRecord {
        self.guard.observe(languages, self.reloader);

        let ctx = ClassifyContext::new(error.message.clone(), self.currency());
        classify(&error.code, &ctx, self.localizer)
    }

    /// Forward a button press on `content` to the host reloader.
    pub fn click(&self, content: &ContentRecord) -> bool {
        content.click(self.reloader)
    }
}
