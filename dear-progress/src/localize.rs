//! Localized string templates
//!
//! Templates use positional placeholders `%s1` through `%s9`. Tokens carry a
//! leading `#`, which [`Localizer::find`] implementations may or may not
//! include in their tables; [`find_or_builtin`] tries both spellings before
//! falling back to the built-in English text.

use crate::progress_debug;
use std::borrow::Cow;

/// Source of localized templates.
pub trait Localizer {
    /// Looks up the template for `token`.
    fn find(&self, token: &str) -> Option<Cow<'_, str>>;
}

/// Built-in English templates for the time-remaining label.
#[derive(Copy, Clone, Debug, Default)]
pub struct EnglishLocalizer;

const ENGLISH: &[(&str, &str)] = &[
    ("vgui_TimeLeftSeconds", "%s1 seconds"),
    ("vgui_TimeLeftSecond", "%s1 second"),
    ("vgui_TimeLeftMinutesSeconds", "%s1 minutes %s2 seconds"),
    ("vgui_TimeLeftMinuteSecond", "%s1 minute %s2 second"),
    ("vgui_TimeLeftMinuteSeconds", "%s1 minute %s2 seconds"),
    ("vgui_TimeLeftMinutesSecond", "%s1 minutes %s2 second"),
    ("vgui_TimeLeftSecondsRemaining", "%s1 seconds remaining"),
    ("vgui_TimeLeftSecondRemaining", "%s1 second remaining"),
    ("vgui_TimeLeftMinutesSecondsRemaining", "%s1 minutes %s2 seconds remaining"),
    ("vgui_TimeLeftMinuteSecondRemaining", "%s1 minute %s2 second remaining"),
    ("vgui_TimeLeftMinuteSecondsRemaining", "%s1 minute %s2 seconds remaining"),
    ("vgui_TimeLeftMinutesSecondRemaining", "%s1 minutes %s2 second remaining"),
];

impl Localizer for EnglishLocalizer {
    fn find(&self, token: &str) -> Option<Cow<'_, str>> {
        let key = token.strip_prefix('#').unwrap_or(token);
        ENGLISH
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| Cow::Borrowed(*text))
    }
}

/// Looks `token` up in `localizer`, then in the built-in English table.
pub fn find_or_builtin<'a>(localizer: &'a dyn Localizer, token: &str) -> Option<Cow<'a, str>> {
    let bare = token.strip_prefix('#').unwrap_or(token);
    localizer
        .find(token)
        .or_else(|| localizer.find(bare))
        .or_else(|| {
            progress_debug!("Localization token {} missing, using built-in text", token);
            EnglishLocalizer.find(bare).map(|text| Cow::Owned(text.into_owned()))
        })
}

/// Substitutes `%s1`..`%s9` in `template` with `args`.
///
/// Placeholders without a matching argument are dropped; any other `%`
/// sequence is copied through.
pub fn construct_string(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '%' && chars.peek() == Some(&'s') {
            let mut lookahead = chars.clone();
            lookahead.next();
            if let Some(digit) = lookahead.peek().and_then(|d| d.to_digit(10)).filter(|d| *d >= 1) {
                chars.next();
                chars.next();
                if let Some(arg) = args.get(digit as usize - 1) {
                    out.push_str(arg);
                }
                continue;
            }
        }
        out.push(c);
    }
    out
}
