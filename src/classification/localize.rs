//! Message templates and the localization seam.
//!
//! Templates are default-language source strings with `{{name}}` placeholders.
//! Translation catalogues live with the host; this crate only names the keys
//! and the values to interpolate.

pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const REFRESH_PAGE: &str = "Refresh page";
pub const MAINTENANCE_IN_PROGRESS: &str = "Maintenance in progress";
pub const WALLET_DEPOSITS_UNAVAILABLE_TITLE: &str =
    "{{currency}} Wallet deposits are temporarily unavailable";
pub const WALLET_DEPOSITS_UNAVAILABLE_MESSAGE: &str = "Due to system maintenance, deposits with your {{currency}} Wallet are unavailable at the moment. Please try again later.";

/// Turns a template plus interpolation values into display text.
pub trait Localizer {
    fn localize(&self, template: &str, values: &[(&str, &str)]) -> String;
}

/// Interpolates `{{name}}` placeholders into the untranslated template.
///
/// A placeholder with no matching value renders as empty text.
/// An unterminated `{{` is kept literally.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn localize(&self, template: &str, values: &[(&str, &str)]) -> String {
        interpolate(template, values)
    }
}

pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        if let Some((_, value)) = values.iter().find(|(key, _)| *key == name) {
            out.push_str(value);
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
