//! Markdown-subset rendering for chat messages.
//!
//! DESIGN
//! ======
//! Answer text is untrusted. It is HTML-escaped first, then a fixed list of
//! substitutions runs once each, in order: bold, italic, inline code, line
//! breaks, bare URLs. Nothing else can produce markup, and because every
//! rule is a single `replace_all` over the previous output there is no
//! re-entrant substitution.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(https?://[^\s<]+)").expect("url pattern"));

/// Render message text to the whitelisted HTML subset.
pub fn format_message_html(content: &str) -> String {
    let escaped = escape_html(content);
    let bold = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let italic = ITALIC.replace_all(&bold, "<em>${1}</em>");
    let code = CODE.replace_all(&italic, "<code>${1}</code>");
    let breaks = code.replace('\n', "<br>");
    URL.replace_all(&breaks, r#"<a href="${1}" target="_blank" rel="noopener noreferrer">${1}</a>"#)
        .into_owned()
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
