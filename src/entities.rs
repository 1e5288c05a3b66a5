//! Single-pass HTML character reference decoding.
//!
//! Upstream systems sometimes deliver content with its markup entity-encoded
//! (`&amp;lt;p&amp;gt;` instead of `<p>`). Running one decode pass before
//! classification lets such content be evaluated in its real form. The pass
//! is applied exactly once: the serializer re-encodes on output, and no
//! second decode runs after sanitization.
//!
//! Only a fixed table of common named references is recognized, plus the
//! numeric `&#NNN;` and `&#xHH;` forms. Anything unknown or malformed passes
//! through literally.

use std::borrow::Cow;

use memchr::memchr;

/// Longest recognized reference body, including `#` but not `&` or `;`.
const MAX_REFERENCE_LEN: usize = 8;

/// Named character references, sorted by name for binary search.
///
/// Covers the five XML-predefined entities and the named references that
/// show up routinely in feed and editor output.
static NAMED: &[(&str, char)] = &[
    ("amp", '&'),
    ("apos", '\''),
    ("bull", '\u{2022}'),
    ("cent", '\u{00A2}'),
    ("copy", '\u{00A9}'),
    ("deg", '\u{00B0}'),
    ("divide", '\u{00F7}'),
    ("euro", '\u{20AC}'),
    ("frac12", '\u{00BD}'),
    ("frac14", '\u{00BC}'),
    ("frac34", '\u{00BE}'),
    ("gt", '>'),
    ("hellip", '\u{2026}'),
    ("laquo", '\u{00AB}'),
    ("ldquo", '\u{201C}'),
    ("lsaquo", '\u{2039}'),
    ("lsquo", '\u{2018}'),
    ("lt", '<'),
    ("mdash", '\u{2014}'),
    ("middot", '\u{00B7}'),
    ("nbsp", '\u{00A0}'),
    ("ndash", '\u{2013}'),
    ("para", '\u{00B6}'),
    ("plusmn", '\u{00B1}'),
    ("pound", '\u{00A3}'),
    ("quot", '"'),
    ("raquo", '\u{00BB}'),
    ("rdquo", '\u{201D}'),
    ("reg", '\u{00AE}'),
    ("rsaquo", '\u{203A}'),
    ("rsquo", '\u{2019}'),
    ("sect", '\u{00A7}'),
    ("sup1", '\u{00B9}'),
    ("sup2", '\u{00B2}'),
    ("sup3", '\u{00B3}'),
    ("times", '\u{00D7}'),
    ("trade", '\u{2122}'),
    ("yen", '\u{00A5}'),
];

/// Decode HTML character references in `text`.
///
/// Returns the input unchanged (borrowed) when it contains no `&`.
///
/// # Examples
///
/// ```
/// use borax::decode_entities;
///
/// assert_eq!(decode_entities("a &amp; b"), "a & b");
/// assert_eq!(decode_entities("&#x41;&#66;"), "AB");
/// // Unknown references pass through literally.
/// assert_eq!(decode_entities("&bogus; &"), "&bogus; &");
/// ```
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if memchr(b'&', bytes).is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = memchr(b'&', &bytes[pos..]) {
        let start = pos + offset;
        out.push_str(&text[pos..start]);
        match parse_reference(&text[start..]) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                pos = start + consumed;
            }
            None => {
                out.push('&');
                pos = start + 1;
            }
        }
    }
    out.push_str(&text[pos..]);
    Cow::Owned(out)
}

/// Try to decode one reference at the start of `text` (which begins with `&`).
///
/// Returns the decoded character and the number of bytes consumed, or `None`
/// when no well-formed, recognized reference starts here.
fn parse_reference(text: &str) -> Option<(char, usize)> {
    let rest = &text[1..];
    let semicolon = rest
        .char_indices()
        .take_while(|(i, _)| *i <= MAX_REFERENCE_LEN)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let body = &rest[..semicolon];
    if body.is_empty() {
        return None;
    }

    let decoded = if let Some(numeric) = body.strip_prefix('#') {
        parse_numeric(numeric)?
    } else {
        let index = NAMED.binary_search_by_key(&body, |&(name, _)| name).ok()?;
        NAMED[index].1
    };

    // '&' + body + ';'
    Some((decoded, 1 + semicolon + 1))
}

/// Decode the body of a numeric reference (after `#`).
fn parse_numeric(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|c| *c != '\0')
}
