/// Escapes text for use inside HTML element content or quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Encodes a string as a JavaScript string literal, safe inside a `<script>` block.
pub fn js_string(input: &str) -> String {
    let json = serde_json::to_string(input).unwrap_or_else(|_| "\"\"".into());
    json.replace("</", "<\\/")
}

/// Substitutes `%%KEY%%` placeholders in `template`. Values are inserted as-is
/// and never rescanned; unknown keys are left in place.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("%%") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after
            .find("%%")
            .and_then(|end| vars.iter().find(|(k, _)| *k == &after[..end]).map(|(_, v)| (end, *v)));
        match value {
            Some((end, v)) => {
                out.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("%%");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape("Côte d’Ivoire"), "Côte d’Ivoire");
    }

    #[test]
    fn fills_placeholders_once() {
        let out = fill("<p>%%A%%|%%B%%|%%C%%</p>", &[("A", "x%%B%%"), ("B", "y")]);
        assert_eq!(out, "<p>x%%B%%|y|%%C%%</p>");
        assert_eq!(fill("width: 100%;", &[]), "width: 100%;");
    }

    #[test]
    fn js_strings_cannot_close_the_script() {
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
        assert_eq!(js_string("</script>"), r#""<\/script>""#);
    }
}
