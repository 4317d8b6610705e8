//! Log-safe formatting for actions.
//!
//! Text payloads (search text, editor contents) are replaced with a length
//! and short hash so logs can correlate edits without recording what was
//! typed. Everything else falls through to `Debug`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::action::variants::Action;

fn redact_text(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    format!("<{} chars, hash={:08x}>", text.chars().count(), hasher.finish() as u32)
}

/// `Debug` wrapper that hides text payloads.
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::SearchChanged(text) => write!(f, "SearchChanged({})", redact_text(text)),
            Action::HtmlChanged(text) => write!(f, "HtmlChanged({})", redact_text(text)),
            Action::CssChanged(text) => write!(f, "CssChanged({})", redact_text(text)),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payloads_are_redacted() {
        let action = Action::HtmlChanged("<p>secret</p>".to_string());
        let logged = format!("{:?}", RedactedAction(&action));
        assert!(logged.starts_with("HtmlChanged(<13 chars, hash="));
        assert!(!logged.contains("secret"));

        let action = Action::SearchChanged("token".to_string());
        assert!(!format!("{:?}", RedactedAction(&action)).contains("token"));
    }

    #[test]
    fn test_same_text_same_hash() {
        let a = format!("{:?}", RedactedAction(&Action::CssChanged("p {}".into())));
        let b = format!("{:?}", RedactedAction(&Action::CssChanged("p {}".into())));
        assert_eq!(a, b);
    }

    #[test]
    fn test_plain_variants_use_debug() {
        assert_eq!(format!("{:?}", RedactedAction(&Action::ToggleExpandAll)), "ToggleExpandAll");
        assert_eq!(
            format!("{:?}", RedactedAction(&Action::ToggleCategory(3))),
            "ToggleCategory(3)"
        );
    }
}
