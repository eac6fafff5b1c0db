//! HTML entity coding and plain-text conversion of prompt messages.
//!
//! Messages are stored entity-encoded and decoded when read, so an administrator can
//! author light markup (`<br>`, `<strong>`) without it ever being stored raw.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("entity pattern is valid")
});
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").expect("tag pattern is valid"));
static STRAY_ANGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>]").expect("angle pattern is valid"));
static BRACKET_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("token pattern is valid"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.)([[:alpha:]]{2,})").expect("sentence pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Encodes the characters that are significant in markup.
pub fn encode_entities(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#039;"),
            c => encoded.push(c),
        }
    }
    encoded
}

/// Decodes named and numeric character references in a single pass.
///
/// Unknown names and invalid code points are left untouched, so `&amp;lt;` decodes to
/// the literal text `&lt;`.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let reference = &caps[1];
            let decoded = match reference.strip_prefix('#') {
                Some(numeric) => decode_numeric(numeric),
                None => named_entity(reference),
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn decode_numeric(numeric: &str) -> Option<char> {
    let code = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => numeric.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "auml" => 'ä',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "eacute" => 'é',
        "egrave" => 'è',
        "agrave" => 'à',
        "ccedil" => 'ç',
        "euro" => '€',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "laquo" => '«',
        "raquo" => '»',
        "bdquo" => '„',
        "ldquo" => '“',
        "rdquo" => '”',
        "lsquo" => '‘',
        "rsquo" => '’',
        _ => return None,
    };
    Some(c)
}

/// Collapses every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Removes markup tags and bracketed placeholder tokens.
///
/// Angle brackets that do not open a tag, as in `5 < 6`, are dropped on their own
/// without taking the surrounding text with them.
pub fn strip_tags(text: &str) -> String {
    let without_tags = TAG.replace_all(text, "");
    let without_angles = STRAY_ANGLE.replace_all(&without_tags, "");
    BRACKET_TOKEN.replace_all(&without_angles, "").into_owned()
}

/// Normalizes spacing of text that lost its markup.
///
/// A period directly followed by two or more letters gets a space inserted, which
/// separates sentences that were split by a removed `<br>` while leaving decimals and
/// single-letter abbreviations (`e.g.`) alone. Whitespace runs are then collapsed.
pub fn format_sentences(text: &str) -> String {
    let spaced = SENTENCE_END.replace_all(text, "${1} ${2}");
    collapse_whitespace(&spaced)
}

/// Turns administrator input into the stored representation.
///
/// Entities are encoded, whitespace is collapsed and the result is trimmed. Duplicate
/// detection compares these stored forms.
pub fn sanitize_message(raw: &str) -> String {
    collapse_whitespace(&encode_entities(raw)).trim().to_string()
}

/// Plain-text rendering of a decoded message.
pub fn to_plain_text(decoded: &str) -> String {
    format_sentences(&strip_tags(decoded))
}
