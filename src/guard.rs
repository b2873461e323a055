use crate::classification::Reloader;

/// Language the session was opened with versus the language the user has selected now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLanguages {
    pub session: String,
    pub current: String,
}

impl SessionLanguages {
    pub fn new(session: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            current: current.into(),
        }
    }

    /// Error text from the connection is bound to `session`; once the user
    /// switches language it can no longer be shown as-is.
    pub fn is_stale(&self) -> bool {
        self.session != self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    InSync,
    ReloadRequested,
    AlreadyRequested,
}

/// Watches [`SessionLanguages`] across renders and requests a full reload on divergence.
///
/// One reload is issued per distinct diverged pair. Observing an in-sync pair re-arms the guard.
#[derive(Debug, Default)]
pub struct LanguageGuard {
    requested_for: Option<SessionLanguages>,
}

impl LanguageGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(
        &mut self,
        languages: &SessionLanguages,
        reloader: &dyn Reloader,
    ) -> GuardOutcome {
        if !languages.is_stale() {
            self.requested_for = None;
            return GuardOutcome::InSync;
        }

        if self.requested_for.as_ref() == Some(languages) {
            tracing::debug!(
                session = %languages.session,
                current = %languages.current,
                "reload already requested for language switch"
            );
            return GuardOutcome::AlreadyRequested;
        }

        tracing::info!(
            session = %languages.session,
            current = %languages.current,
            "session language is stale, reloading"
        );
        self.requested_for = Some(languages.clone());
        reloader.reload();
        GuardOutcome::ReloadRequested
    }
}
