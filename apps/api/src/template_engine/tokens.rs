//! `{{name}}` token matching shared by every substitution step.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("token pattern is valid"));

/// A token name (without braces) paired with the final markup that replaces it.
pub(crate) type Substitution = (&'static str, String);

/// Replaces every token named in `substitutions` in a single left-to-right pass.
///
/// Tokens without a matching entry are left in place for later steps. Values
/// are inserted verbatim and are never rescanned by this pass.
pub(crate) fn fill_tokens(fragment: &str, substitutions: &[Substitution]) -> String {
    TOKEN
        .replace_all(fragment, |caps: &Captures| {
            let name = &caps[1];
            substitutions
                .iter()
                .find(|(token, _)| *token == name)
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.clone())
        })
        .into_owned()
}

/// Removes every `{{word}}` token still present.
pub(crate) fn strip_unresolved(html: &str) -> String {
    TOKEN.replace_all(html, "").into_owned()
}
