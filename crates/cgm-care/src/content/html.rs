use std::fmt::Write;

/// Escape text for use in element content and quoted attribute values.
pub(crate) fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// JSON inside `<script>` only needs `</` broken up.
pub(crate) fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub(crate) fn bullet_list(out: &mut String, items: &[&str]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

pub(crate) fn section_heading(out: &mut String, id: Option<&str>, title: &str) {
    match id {
        Some(id) => {
            let _ = write!(out, "<h2 id=\"{}\">{}</h2>", escape(id), escape(title));
        }
        None => {
            let _ = write!(out, "<h2>{}</h2>", escape(title));
        }
    }
}

pub(crate) fn link(out: &mut String, href: &str, label: &str, class: &str) {
    let _ = write!(
        out,
        "<a class=\"{}\" href=\"{}\">{}</a>",
        escape(class),
        escape(href),
        escape(label)
    );
}

pub(crate) fn hidden_input(out: &mut String, name: &str, value: &str) {
    let _ = write!(
        out,
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        escape(name),
        escape(value)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        let rendered = script_json(&json!({ "name": "</script><b>" }));
        assert!(!rendered.contains("</script>"));
    }
}
