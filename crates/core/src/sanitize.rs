//! HTML sanitization for free-text fields.
//!
//! Every user-supplied text field (`name`, note `content`) passes
//! through [`sanitize`] before it is serialized into a response. The
//! policy mirrors the one the service has always exposed:
//!
//! - tags on the allow-list are re-emitted with only their allow-listed
//!   attributes (so `<img src=... onerror=...>` keeps `src` and loses
//!   `onerror`);
//! - any other tag is entity-encoded whole, brackets in its body
//!   included (`<script>` becomes `&lt;script&gt;`);
//! - stray `<` and `>` in plain text are entity-encoded; all other
//!   text, including quotes, is untouched.
//!
//! The transform is deterministic and idempotent: sanitized output
//! contains `<` only in normalized allow-listed tags, which re-parse to
//! themselves.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a candidate tag: optional `/`, a name, then anything up to
/// the first `>`.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").expect("valid regex"));

/// Matches one attribute inside a tag: a name, optionally `=` and a
/// double-quoted, single-quoted, or bare value.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z][a-zA-Z0-9:_-]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("valid regex")
});

/// Attributes kept for an allow-listed tag, or `None` if the tag is not
/// allowed at all.
fn allowed_attrs(tag: &str) -> Option<&'static [&'static str]> {
    Some(match tag {
        "a" => &["href", "title", "target"],
        "abbr" => &["title"],
        "blockquote" => &["cite"],
        "img" => &["src", "alt", "title", "width", "height"],
        "b" | "br" | "code" | "em" | "hr" | "i" | "li" | "ol" | "p" | "pre" | "small"
        | "span" | "strong" | "sub" | "sup" | "ul" | "h1" | "h2" | "h3" | "h4" | "h5"
        | "h6" => &[],
        _ => return None,
    })
}

/// Sanitize a free-text field for inclusion in a response body.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in TAG_RE.captures_iter(input) {
        let whole = caps.get(0).expect("capture 0 is the whole match");
        escape_text(&input[last..whole.start()], &mut out);

        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();

        match allowed_attrs(&name) {
            Some(_) if closing => {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            Some(allowed) => emit_tag(&name, &caps[3], allowed, &mut out),
            None => {
                // Entity-encode the brackets and any brackets inside the
                // tag body, so a second pass sees no raw `<` here.
                let inner = &whole.as_str()[1..whole.as_str().len() - 1];
                out.push_str("&lt;");
                escape_text(inner, &mut out);
                out.push_str("&gt;");
            }
        }

        last = whole.end();
    }

    escape_text(&input[last..], &mut out);
    out
}

/// Re-emit an allow-listed tag with only its allow-listed attributes,
/// normalized to `attr="value"` form, in source order.
fn emit_tag(name: &str, raw_attrs: &str, allowed: &[&str], out: &mut String) {
    out.push('<');
    out.push_str(name);

    for caps in ATTR_RE.captures_iter(raw_attrs) {
        let attr = caps[1].to_ascii_lowercase();
        if !allowed.contains(&attr.as_str()) {
            continue;
        }

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str());

        // URL-bearing attributes must not smuggle script.
        if let Some(v) = value {
            if matches!(attr.as_str(), "href" | "src")
                && v.trim_start().to_ascii_lowercase().starts_with("javascript:")
            {
                continue;
            }
        }

        out.push(' ');
        out.push_str(&attr);
        if let Some(v) = value {
            out.push_str("=\"");
            escape_attr(v, out);
            out.push('"');
        }
    }

    out.push('>');
}

/// Entity-encode `<` and `>` in plain text, leaving everything else
/// (including quotes and existing entities) untouched.
fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}

/// Entity-encode characters that could break out of a double-quoted
/// attribute value.
fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}
