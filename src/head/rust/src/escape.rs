/* src/head/rust/src/escape.rs */

/// Escape JSON text for embedding inside a `<script>` element.
///
/// Walks the JSON text tracking whether the current position is inside a
/// JSON string (handling `\"` and `\\` correctly). Inside strings, `<`, `>`
/// and `&` become `\u003c`/`\u003e`/`\u0026` so the payload can never close
/// the script tag or open a comment, and every non-ASCII codepoint becomes
/// `\uXXXX` (surrogate pairs outside the BMP). The result parses back to the
/// same JSON value.
pub fn escape_json_for_script(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  let mut in_string = false;
  let mut chars = json.chars();

  while let Some(ch) = chars.next() {
    if !in_string {
      if ch == '"' {
        in_string = true;
      }
      out.push(ch);
      continue;
    }
    match ch {
      '\\' => {
        out.push(ch);
        if let Some(next) = chars.next() {
          out.push(next);
        }
      }
      '"' => {
        in_string = false;
        out.push(ch);
      }
      '<' | '>' | '&' => push_unit(&mut out, ch as u32),
      c if (c as u32) > 0x7F => {
        let code = c as u32;
        if code > 0xFFFF {
          let adjusted = code - 0x1_0000;
          push_unit(&mut out, (adjusted >> 10) + 0xD800);
          push_unit(&mut out, (adjusted & 0x3FF) + 0xDC00);
        } else {
          push_unit(&mut out, code);
        }
      }
      c => out.push(c),
    }
  }
  out
}

fn push_unit(out: &mut String, unit: u32) {
  out.push_str(&format!("\\u{unit:04x}"));
}

/// Escape text for an HTML attribute value or text node.
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ascii_passthrough() {
    let input = r#"{"key":"hello","n":1}"#;
    assert_eq!(escape_json_for_script(input), input);
  }

  #[test]
  fn script_close_neutralized() {
    let input = r#"{"name":"</script><script>alert(1)</script>"}"#;
    let out = escape_json_for_script(input);
    assert!(!out.contains("</script"));
    assert!(out.contains(r"\u003c/script\u003e"));
  }

  #[test]
  fn ampersand_and_comment_open() {
    let out = escape_json_for_script(r#"{"a":"Tom & Jerry <!--"}"#);
    assert_eq!(out, r#"{"a":"Tom \u0026 Jerry \u003c!--"}"#);
  }

  #[test]
  fn escapes_non_ascii() {
    let out = escape_json_for_script("{\"msg\":\"\u{4f60}\u{597d}\"}");
    assert_eq!(out, r#"{"msg":"\u4f60\u597d"}"#);
  }

  #[test]
  fn surrogate_pair_for_emoji() {
    let out = escape_json_for_script("{\"e\":\"\u{1F600}\"}");
    assert_eq!(out, r#"{"e":"\ud83d\ude00"}"#);
  }

  #[test]
  fn line_separators_escaped() {
    let out = escape_json_for_script("{\"a\":\"x\u{2028}y\u{2029}\"}");
    assert_eq!(out, r#"{"a":"x\u2028y\u2029"}"#);
  }

  #[test]
  fn preserves_existing_escapes() {
    let input = r#"{"a":"say \"hi\"","b":"back\\slash"}"#;
    assert_eq!(escape_json_for_script(input), input);
  }

  #[test]
  fn output_parses_to_same_value() {
    let value = serde_json::json!({"t": "\u{00dc}ber </script> & \u{1F600}", "n": [1, 2]});
    let text = serde_json::to_string(&value).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&escape_json_for_script(&text)).unwrap();
    assert_eq!(parsed, value);
  }

  #[test]
  fn html_escaping() {
    assert_eq!(escape_html(r#"a<b>&"c"'d"#), "a&lt;b&gt;&amp;&quot;c&quot;&#39;d");
    assert_eq!(escape_html("plain"), "plain");
  }
}
