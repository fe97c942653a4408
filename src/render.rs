use serde_json::Value;

/// Escape text for interpolation into HTML element content or attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped text with literal newlines turned into `<br>`.
/// This is the whole of the "markdown" support for `about.summary_md`.
pub fn text_with_breaks(s: &str) -> String {
    html_escape(s).replace('\n', "<br>")
}

/// Whether a value counts as present. Null, false, 0, NaN and "" do not.
pub fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text of a field, or `None` when the field is absent.
/// Arrays are joined with ", "; objects have no text form.
pub fn field_text(v: Option<&Value>) -> Option<String> {
    let v = v.filter(|v| is_present(v))?;
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) => Some(number_text(v)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|i| field_text(Some(i)).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Null | Value::Object(_) => None,
    }
}

/// Display text of a field with a fallback for absent values.
pub fn text_or(v: Option<&Value>, def: &str) -> String {
    field_text(v).unwrap_or_else(|| def.to_string())
}

/// Integral numbers print without a fractional part (`40.0` -> `40`).
fn number_text(v: &Value) -> String {
    if let Some(i) = v.as_i64() {
        return i.to_string();
    }
    if let Some(u) = v.as_u64() {
        return u.to_string();
    }
    match v.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => String::new(),
    }
}

/// Elements of an array field; anything else is an empty list.
pub fn list(v: Option<&Value>) -> &[Value] {
    match v {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Text of each element of an array field, absent elements as "".
pub fn list_texts(v: Option<&Value>) -> Vec<String> {
    list(v)
        .iter()
        .map(|i| field_text(Some(i)).unwrap_or_default())
        .collect()
}

/// Numeric sort key for a year field. Numeric strings are coerced, anything else is 0.
pub fn year_key(v: Option<&Value>) -> f64 {
    let key = match v {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if key.is_nan() {
        0.0
    } else {
        key
    }
}

/// External link styled as a button. Empty href renders nothing.
/// The href is trusted and inserted as-is.
pub fn link_button(label: &str, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    format!(
        r#"<a class="button" href="{}" target="_blank" rel="noopener">{}</a>"#,
        href, label
    )
}

/// Plain external link, only when an href is present.
pub fn link_maybe(label: &str, href: Option<&str>) -> String {
    match href {
        Some(h) if !h.is_empty() => format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            h, label
        ),
        _ => String::new(),
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escaped text in a badge pill.
pub fn badge(text: &str) -> String {
    format!(r#"<span class="badge">{}</span>"#, html_escape(text))
}

/// Placeholder shown in place of an empty list.
pub fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty">{}</div>"#, message)
}

/// Items wrapped in a list container, or the message when there are none.
pub fn list_or_empty(items: &[String], message: &str) -> String {
    let inner = if items.is_empty() {
        empty_state(message)
    } else {
        items.concat()
    };
    format!(r#"<div class="list">{}</div>"#, inner)
}

/// A titled sub-block used by the service page.
pub fn section_block(title: &str, items: &[String]) -> String {
    format!(
        r#"<div><h3 style="margin-top:1rem">{}</h3>{}</div>"#,
        title,
        list_or_empty(items, "No entries.")
    )
}
