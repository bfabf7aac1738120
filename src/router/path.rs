use super::error::{PathError, RouterError};

use std::borrow::Cow;

use smallvec::SmallVec;
use url::Url;

const COLON: char = ':';
const SLASH: char = '/';
const PERCENT: u8 = b'%';

/// The synthetic segment standing in for the root path.
pub(crate) const ROOT: &str = "";

pub(crate) type Segments<'p> = SmallVec<[Cow<'p, str>; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Part<'p> {
    Literal(&'p str),
    Param(&'p str),
}

/// Splits a path template into its segment descriptors.
///
/// Empty segments are dropped; a template with no segments at all yields the
/// root segment. `:` alone is a parameter with an empty name.
pub(crate) fn parse_template(pattern: &str) -> SmallVec<[Part<'_>; 8]> {
    let mut parts: SmallVec<[Part<'_>; 8]> = pattern
        .split(SLASH)
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(COLON) {
            Some(name) => Part::Param(name),
            None => Part::Literal(s),
        })
        .collect();
    if parts.is_empty() {
        parts.push(Part::Literal(ROOT));
    }
    parts
}

/// Resolves `path` against `base`.
pub(crate) fn resolve(base: &Url, path: &str) -> Result<Url, RouterError> {
    base.join(path).map_err(|e| RouterError::malformed(path, e))
}

/// Splits a resolved url's path into percent-decoded segments.
pub(crate) fn split_path(url: &Url) -> Result<Segments<'_>, RouterError> {
    let path = url.path();
    let mut segments = Segments::new();
    for raw in path.split(SLASH).filter(|s| !s.is_empty()) {
        segments.push(decode_segment(raw).map_err(|e| RouterError::malformed(path, e))?);
    }
    if segments.is_empty() {
        segments.push(Cow::Borrowed(ROOT));
    }
    Ok(segments)
}

fn decode_segment(raw: &str) -> Result<Cow<'_, str>, PathError> {
    let bytes = raw.as_bytes();
    if !bytes.contains(&PERCENT) {
        return Ok(Cow::Borrowed(raw));
    }
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == PERCENT {
            let valid = bytes
                .get(i + 1..i + 3)
                .map_or(false, |hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(PathError::InvalidEscape {
                    segment: raw.to_owned(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(raw).map_err(|_| PathError::InvalidUtf8 {
        segment: raw.to_owned(),
    })
}
