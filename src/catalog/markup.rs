//! Plain-text rendering of catalog descriptions.
//!
//! Descriptions arrive as a small subset of HTML (`<p>`, `<br>`, `<b>`, `<i>`,
//! entities). The terminal can't render markup, so tags are dropped, block
//! breaks become newlines and the common entities are decoded.

/// Strips tags and decodes common entities.
///
/// # Examples
///
/// ```
/// use bookworld::catalog::strip_html;
///
/// assert_eq!(strip_html("<p>A &amp; B</p><p>C</p>"), "A & B\nC");
/// ```
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        if !opens_tag(&rest[start + 1..]) {
            text.push('<');
            rest = &rest[start + 1..];
            continue;
        }
        let Some(len) = rest[start..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            rest = &rest[start..];
            break;
        };
        let tag = rest[start + 1..start + len].trim().to_ascii_lowercase();
        if is_break(&tag) && !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        rest = &rest[start + len + 1..];
    }
    text.push_str(rest);

    decode_entities(text.trim())
}

/// A `<` starts a tag only when followed by a letter, `/` or `!`.
fn opens_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

fn is_break(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    matches!(name, "br" | "p" | "div" | "li")
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 7] = [
        ("&nbsp;", " "),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&amp;", "&"),
    ];

    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_inline_tags() {
        assert_eq!(strip_html("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn block_tags_become_newlines() {
        assert_eq!(strip_html("one<br>two<br/>three"), "one\ntwo\nthree");
        assert_eq!(strip_html("<p>first</p><p>second</p>"), "first\nsecond");
    }

    #[test]
    fn decodes_entities_once() {
        assert_eq!(strip_html("Tom &amp; Jerry &lt;3"), "Tom & Jerry <3");
        assert_eq!(strip_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn plain_text_and_unterminated_tags_survive() {
        assert_eq!(strip_html("no markup"), "no markup");
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn comparisons_are_not_tags() {
        assert_eq!(strip_html("if a < b and c > d then"), "if a < b and c > d then");
        assert_eq!(strip_html("x<3 and <b>y</b>"), "x<3 and y");
        assert_eq!(strip_html("a<!-- note -->b"), "ab");
    }
}
