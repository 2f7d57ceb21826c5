//! Language selection and name formatting. Everything here is pure and total.

use crate::api::LocalizedName;
use schema::PokemonType;

/// Korean tags in preference order; a few upstream entries only carry `ko-kr`.
pub const KOREAN: &[&str] = &["ko", "ko-kr"];

/// Kana Japanese first, then the generic `ja` tag.
pub const JAPANESE: &[&str] = &["ja-Hrkt", "ja"];

/// The variant tagged exactly `language`, if any.
pub fn pick_localized_name<'a>(names: &'a [LocalizedName], language: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.as_str())
}

/// First variant matching `preferred` in order, else the title-cased canonical name.
pub fn localize_name(names: &[LocalizedName], preferred: &[&str], canonical: &str) -> String {
    preferred
        .iter()
        .find_map(|language| pick_localized_name(names, language))
        .map(str::to_string)
        .unwrap_or_else(|| to_title(canonical))
}

/// `"mr-mime"` -> `"Mr Mime"`. Hyphens and underscores become spaces and the
/// first letter of every word is upper-cased.
pub fn to_title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Lowercase ASCII slug: runs of anything outside `[a-z0-9]` collapse to a
/// single `-` and the ends are trimmed.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    let mut pending_separator = false;
    for c in s.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Korean label for a canonical type identifier. Unknown identifiers pass
/// through unchanged so new upstream types never break a build.
pub fn type_label(identifier: &str) -> String {
    identifier
        .parse::<PokemonType>()
        .map(|ty| ty.korean_label().to_string())
        .unwrap_or_else(|_| identifier.to_string())
}
