#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classification;
pub mod codes;
pub mod error;
pub mod guard;
pub mod screen;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classification::localize::{DefaultLocalizer, Localizer};
pub use classification::table::{ContentOverride, classify, default_record, override_for};
pub use classification::{ActionKind, ContentRecord, RecoveryAction, Reloader};
pub use codes::{DepositErrorCode, ErrorKind};
pub use error::Error;
pub use guard::{GuardOutcome, LanguageGuard, SessionLanguages};
pub use screen::{AccountSource, DepositErrorScreen};
pub use types::{AccountProjection, ClassifyContext, ErrorInput, ScreenConfig};
