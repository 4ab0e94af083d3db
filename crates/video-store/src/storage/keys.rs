//! Mapping between object identifiers and `object_store` paths.
//!
//! A key that [`Path::parse`] accepts verbatim and that contains no `%` is
//! stored as-is, so `clip [1].mp4` or `dir/clip.mp4` land in the bucket
//! under exactly that name. Every other key (`..` segments, empty segments,
//! leading or trailing `/`, control characters, `%`) is stored with each
//! segment percent-encoded by [`PathPart`]. Escaped paths always contain a
//! `%` and raw paths never do, so [`object_key`] can tell them apart and
//! the mapping is lossless in both directions.

use object_store::path::{Path, PathPart, DELIMITER};
use percent_encoding::percent_decode_str;

/// Path under which `key` is stored
pub fn object_path(key: &str) -> Path {
    match Path::parse(key) {
        Ok(path) if path.to_string() == key && !key.contains('%') => path,
        _ => escaped_path(key),
    }
}

/// Identifier of the object stored at `path`; inverse of [`object_path`]
pub fn object_key(path: &Path) -> String {
    let raw: &str = path.as_ref();
    if !raw.contains('%') {
        return raw.to_string();
    }

    path.parts()
        .map(|part| {
            percent_decode_str(part.as_ref())
                .decode_utf8_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

// Empty segments cannot be path parts, so a `/` that would open one stays
// inside the neighbouring part, where PathPart encodes it as %2F.
fn escaped_path(key: &str) -> Path {
    let mut parts: Vec<PathPart<'static>> = Vec::new();
    let mut segments = key.split(DELIMITER);
    let mut current = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        if !current.is_empty() && !segment.is_empty() {
            parts.push(PathPart::from(std::mem::take(&mut current)));
        } else {
            current.push_str(DELIMITER);
        }
        current.push_str(segment);
    }
    if !current.is_empty() {
        parts.push(PathPart::from(current));
    }

    Path::from_iter(parts)
}
