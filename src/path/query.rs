use memchr::memchr;

/// Drops everything from the first `?` on. No other normalization happens:
/// no percent-decoding, no case folding, no slash collapsing.
#[inline]
pub fn strip_query(path: &str) -> &str {
    match memchr(b'?', path.as_bytes()) {
        Some(idx) => &path[..idx],
        None => path,
    }
}
