//! JSON syntax highlighting for the diff view. One token regex pass over
//! escaped pretty-printed JSON, each token wrapped in a classed span.

use regex::Regex;
use serde_json::Value;

/// Escapes the three characters that would break HTML element content.
pub fn escape_html(source: &str) -> String {
    source
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub struct JsonHighlighter {
    token: Regex,
}

impl JsonHighlighter {
    pub fn new() -> Self {
        // strings (optionally followed by a colon, which marks a key),
        // literals, numbers; punctuation stays unwrapped
        let token = Regex::new(
            r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(\.\d*)?([eE][+\-]?\d+)?"#,
        )
        .unwrap();
        Self { token }
    }

    /// Pretty-prints a value and highlights the result.
    pub fn highlight(&self, value: &Value) -> String {
        let json = serde_json::to_string_pretty(value).unwrap_or_default();
        self.highlight_source(&json)
    }

    /// Highlights an already-serialized JSON string. Line structure is
    /// preserved exactly: spans never span lines.
    pub fn highlight_source(&self, json: &str) -> String {
        let escaped = escape_html(json);
        self.token
            .replace_all(&escaped, |caps: &regex::Captures| {
                let text = &caps[0];
                let class = if text.starts_with('"') {
                    if text.ends_with(':') {
                        "json-key"
                    } else {
                        "json-string"
                    }
                } else if text == "true" || text == "false" {
                    "json-boolean"
                } else if text == "null" {
                    "json-null"
                } else {
                    "json-number"
                };
                format!(r#"<span class="{}">{}</span>"#, class, text)
            })
            .into_owned()
    }
}

impl Default for JsonHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_and_values_get_distinct_classes() {
        let html = JsonHighlighter::new().highlight(&json!({"color": "#EF9108"}));
        assert!(html.contains(r#"<span class="json-key">"color":</span>"#));
        assert!(html.contains(r##"<span class="json-string">"#EF9108"</span>"##));
    }

    #[test]
    fn test_literals_and_numbers() {
        let html = JsonHighlighter::new().highlight(&json!({
            "opacity": 0.5,
            "visible": true,
            "parent": null,
            "angle": -45
        }));
        assert!(html.contains(r#"<span class="json-number">0.5</span>"#));
        assert!(html.contains(r#"<span class="json-boolean">true</span>"#));
        assert!(html.contains(r#"<span class="json-null">null</span>"#));
        assert!(html.contains(r#"<span class="json-number">-45</span>"#));
    }

    #[test]
    fn test_markup_in_string_values_is_escaped() {
        let html = JsonHighlighter::new().highlight(&json!({"label": "<b>&</b>"}));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_line_structure_is_preserved() {
        let highlighter = JsonHighlighter::new();
        let value = json!({"fill": [{"mode": "solid", "color": "#111"}], "border": {"width": "1px"}});
        let json = serde_json::to_string_pretty(&value).unwrap();
        let html = highlighter.highlight_source(&json);
        assert_eq!(json.lines().count(), html.lines().count());
    }
}
