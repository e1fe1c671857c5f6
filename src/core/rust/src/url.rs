/* src/core/rust/src/url.rs */

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::errors::SeoError;

/// Bytes escaped inside one path segment: everything outside RFC 3986
/// `pchar`, plus `%` (segments are decoded first) and `/` (a decoded `%2F`
/// must not become a separator). Non-ASCII is always escaped.
const SEGMENT: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'%')
  .add(b'/')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'[')
  .add(b'\\')
  .add(b']')
  .add(b'^')
  .add(b'`')
  .add(b'{')
  .add(b'|')
  .add(b'}');

/// ASCII that may never appear in an absolute URL we emit.
fn is_forbidden_url_byte(b: u8) -> bool {
  b.is_ascii_control() || b" \"<>\\^`{|}".contains(&b)
}

/// Normalize a page path to `""` (home) or `/seg/seg`.
///
/// Adds a missing leading slash, collapses repeated slashes and drops the
/// trailing one. Each segment is percent-decoded, checked, then re-encoded,
/// so `a b` and `a%20b` both become `a%20b`. Rejects query strings,
/// fragments, absolute URLs, `.`/`..` segments and paths whose first segment
/// is already one of `locales`.
pub fn normalize_path(path: &str, locales: &[String]) -> Result<String, SeoError> {
  let trimmed = path.trim();
  if trimmed.contains("://") {
    return Err(SeoError::malformed(format!("path \"{path}\" must be site-relative, not a URL")));
  }
  if trimmed.contains(['?', '#']) {
    return Err(SeoError::malformed(format!(
      "path \"{path}\" must not carry a query string or fragment"
    )));
  }

  let mut out = String::with_capacity(trimmed.len() + 1);
  for (idx, raw) in trimmed.split('/').filter(|s| !s.is_empty()).enumerate() {
    let segment = percent_decode_str(raw).decode_utf8().map_err(|_| {
      SeoError::malformed(format!("path \"{path}\" has a segment that is not valid UTF-8"))
    })?;
    if segment == "." || segment == ".." {
      return Err(SeoError::malformed(format!("path \"{path}\" must not contain dot segments")));
    }
    if idx == 0 && locales.iter().any(|l| *l == segment) {
      return Err(SeoError::malformed(format!(
        "path \"{path}\" is already prefixed with locale \"{segment}\""
      )));
    }
    out.push('/');
    out.extend(utf8_percent_encode(&segment, SEGMENT));
  }
  Ok(out)
}

/// Join base URL, locale and an already-normalized path.
pub fn locale_url(base: &str, locale: &str, normalized_path: &str) -> String {
  format!("{}/{locale}{normalized_path}", base.trim_end_matches('/'))
}

/// `http(s)://` followed by a non-empty host.
pub fn is_absolute_url(url: &str) -> bool {
  let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
  rest.is_some_and(|r| !r.is_empty() && !r.starts_with('/'))
}

/// Validate a caller-supplied absolute URL for output. Non-ASCII is
/// percent-encoded; whitespace, quotes, angle brackets and controls are
/// rejected.
pub fn absolute_url(url: &str) -> Result<String, SeoError> {
  if !is_absolute_url(url) {
    return Err(SeoError::malformed(format!("\"{url}\" is not an absolute URL with a host")));
  }
  if url.bytes().any(is_forbidden_url_byte) {
    return Err(SeoError::malformed(format!("URL \"{url}\" contains characters invalid in a URL")));
  }
  Ok(utf8_percent_encode(url, CONTROLS).to_string())
}

/// Open Graph locale format: `en-US` becomes `en_US`.
pub fn og_locale(locale: &str) -> String {
  locale.replace('-', "_")
}
