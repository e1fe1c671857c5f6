/* src/head/rust/src/inject.rs */

use pagemeta::{PageMetadata, SeoError};
use serde_json::Value;

use crate::escape::escape_html;
use crate::render::{json_ld_scripts, render_head_meta};

const CHARSET: &str = r#"<meta charset="utf-8">"#;

/// Locate the `<html ...>` start tag, returning `(start, end)` where `end`
/// points just past `>`.
fn find_html_tag(html: &str) -> Option<(usize, usize)> {
  let mut from = 0;
  while let Some(rel) = html[from..].find("<html") {
    let start = from + rel;
    let after = &html[start + 5..];
    if after.starts_with(|c: char| c == '>' || c.is_ascii_whitespace()) {
      let end = start + 5 + after.find('>')? + 1;
      return Some((start, end));
    }
    from = start + 5;
  }
  None
}

fn is_tag(s: &str, open: &str) -> bool {
  s.strip_prefix(open)
    .is_some_and(|r| r.starts_with(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace()))
}

/// Byte span of the value of attribute `name` inside one start tag, quotes
/// included. Handles `"..."`, `'...'` and unquoted values.
fn find_attr(tag: &str, name: &str) -> Option<(usize, usize)> {
  let lower = tag.to_ascii_lowercase();
  let bytes = lower.as_bytes();
  let skip_ws = |mut i: usize| {
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
      i += 1;
    }
    i
  };
  let mut from = 0;
  while let Some(rel) = lower[from..].find(name) {
    let at = from + rel;
    from = at + name.len();
    if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
      continue;
    }
    let eq = skip_ws(from);
    if bytes.get(eq) != Some(&b'=') {
      continue;
    }
    let start = skip_ws(eq + 1);
    let end = match bytes.get(start) {
      Some(&quote @ (b'"' | b'\'')) => start + 2 + lower[start + 1..].find(char::from(quote))?,
      Some(_) => lower[start..]
        .find(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace())
        .map_or(lower.len(), |n| start + n),
      None => return None,
    };
    return Some((start, end));
  }
  None
}

/// Set `<html lang="...">`, replacing an existing `lang` value in any
/// quoting style.
pub fn inject_html_lang(html: &str, locale: &str) -> String {
  let Some((start, end)) = find_html_tag(html) else {
    return html.to_string();
  };
  let tag = &html[start..end];
  let locale = escape_html(locale);
  let new_tag = match find_attr(tag, "lang") {
    Some((value_start, value_end)) => {
      format!("{}\"{locale}\"{}", &tag[..value_start], &tag[value_end..])
    }
    None => format!("<html lang=\"{locale}\"{}", &tag[5..]),
  };
  let mut result = String::with_capacity(html.len() + locale.len() + 8);
  result.push_str(&html[..start]);
  result.push_str(&new_tag);
  result.push_str(&html[end..]);
  result
}

/// Remove `<title>` elements and `<meta name="description">` tags from the
/// document head.
fn strip_title_and_description(html: &str) -> String {
  let Some(head_end) = html.find("</head>") else {
    return html.to_string();
  };
  let lower = html[..head_end].to_ascii_lowercase();
  let mut result = String::with_capacity(html.len());
  let mut copied = 0;
  let mut from = 0;
  while let Some(rel) = lower[from..].find('<') {
    let start = from + rel;
    let rest = &lower[start..];
    let skip_to = if is_tag(rest, "<title") {
      rest.find("</title>").map(|n| start + n + "</title>".len())
    } else if is_tag(rest, "<meta") {
      rest.find('>').map(|n| start + n + 1).filter(|&end| {
        find_attr(&lower[start..end], "name").is_some_and(|(vs, ve)| {
          lower[start + vs..start + ve].trim_matches(['"', '\'']) == "description"
        })
      })
    } else {
      None
    };
    match skip_to {
      Some(end) => {
        result.push_str(&html[copied..start]);
        copied = end;
        from = end;
      }
      None => from = start + 1,
    }
  }
  result.push_str(&html[copied..]);
  result
}

/// Inject head markup after `<meta charset="utf-8">`, falling back to just
/// before `</head>`. Documents with neither are returned unchanged.
///
/// Existing tags are left alone; [`inject_page_head`] strips a template's
/// own `<title>` and description first.
pub fn inject_head_meta(html: &str, meta_html: &str) -> String {
  let insert_at = if let Some(pos) = html.find(CHARSET) {
    pos + CHARSET.len()
  } else if let Some(pos) = html.find("</head>") {
    pos
  } else {
    return html.to_string();
  };
  let mut result = String::with_capacity(html.len() + meta_html.len());
  result.push_str(&html[..insert_at]);
  result.push_str(meta_html);
  result.push_str(&html[insert_at..]);
  result
}

/// Insert markup just before `</head>`, or return the document unchanged.
pub fn inject_before_head_close(html: &str, fragment: &str) -> String {
  match html.find("</head>") {
    Some(pos) => {
      let mut result = String::with_capacity(html.len() + fragment.len());
      result.push_str(&html[..pos]);
      result.push_str(fragment);
      result.push_str(&html[pos..]);
      result
    }
    None => html.to_string(),
  }
}

/// Apply `lang`, head tags and JSON-LD scripts to a full HTML document.
/// Any `<title>` or `<meta name="description">` already in the head is
/// replaced by the rendered one.
pub fn inject_page_head(
  html: &str,
  meta: &PageMetadata,
  locale: &str,
  graph: &[Value],
) -> Result<String, SeoError> {
  let scripts = json_ld_scripts(graph)?;
  let html = strip_title_and_description(&inject_html_lang(html, locale));
  let html = inject_head_meta(&html, &render_head_meta(meta));
  Ok(inject_before_head_close(&html, &scripts))
}
