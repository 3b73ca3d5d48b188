//! Markup-safe text for the panel and toast renderers.
//!
//! Notification messages and project labels come from an external agent
//! process and must never reach the rendered markup unescaped. `SafeText`
//! can only be produced by [`escape`], so a renderer that accepts
//! `SafeText` cannot be handed raw input by mistake.

use std::fmt;

/// A string with the five markup metacharacters (`& < > " '`) escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeText(String);

impl SafeText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape untrusted text for embedding in markup.
pub fn escape(raw: &str) -> SafeText {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    SafeText(out)
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_all_five_metacharacters() {
        assert_eq!(
            escape(r#"<b a="1">&'x'</b>"#).as_str(),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(escape("repo-a: task done").as_str(), "repo-a: task done");
    }

    #[test]
    fn passes_unicode_through() {
        assert_eq!(escape("🔔 Approval needed").as_str(), "🔔 Approval needed");
    }

    #[test]
    fn ampersand_is_not_double_escaped_by_renderers() {
        // Renderers embed SafeText verbatim; escaping happens exactly once.
        assert_eq!(escape("a&b").as_str(), "a&amp;b");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(escape("").as_str(), "");
    }
}
