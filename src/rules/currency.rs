//! Currency substitution rules
//!
//! Two rewrites, applied in order:
//! 1. `$` followed by optional whitespace and a digit becomes `₹`
//! 2. every `USD` becomes `INR`
//!
//! Both work on plain text and know nothing about the surrounding syntax.

use once_cell::sync::Lazy;
use regex::Regex;

/// Symbol written in place of a dollar sign that introduces an amount
pub const TARGET_SYMBOL: &str = "₹";

/// Currency code replaced unconditionally
pub const SOURCE_CODE: &str = "USD";

/// Replacement for [`SOURCE_CODE`]
pub const TARGET_CODE: &str = "INR";

/// Dollar sign followed by optional whitespace and a digit.
///
/// `regex` has no lookahead, so the trailing whitespace and digit are captured
/// and put back by the replacement. The captured tail never contains `$`, so
/// no later dollar sign is swallowed by an earlier match.
///
/// The information separators U+001C..U+001F count as whitespace here;
/// Unicode `\s` leaves them out.
pub static DOLLAR_AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$([\s\x1C-\x1F]*\d)").expect("Invalid DOLLAR_AMOUNT_RE regex")
});

/// Replace dollar signs that introduce a numeric amount
pub fn replace_dollar_amounts(content: &str) -> String {
    DOLLAR_AMOUNT_RE
        .replace_all(content, format!("{}${{1}}", TARGET_SYMBOL).as_str())
        .into_owned()
}

/// Replace every occurrence of the source currency code
pub fn replace_currency_code(content: &str) -> String {
    content.replace(SOURCE_CODE, TARGET_CODE)
}

/// Apply both rules, returning (converted_content, changed)
pub fn convert_content(content: &str) -> (String, bool) {
    let converted = replace_currency_code(&replace_dollar_amounts(content));
    let changed = converted != content;
    (converted, changed)
}
