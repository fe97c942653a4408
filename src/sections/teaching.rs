use serde_json::Value;

use crate::models::cv::CvDocument;
use crate::render::{field_text, html_escape, link_button, list_or_empty, list_texts, text_or};

pub fn render(doc: &CvDocument) -> String {
    let items: Vec<String> = doc
        .list(&["teaching"])
        .iter()
        .map(render_course)
        .collect();

    format!(
        "<section><h2>Teaching</h2>{}</section>",
        list_or_empty(&items, "No teaching entries.")
    )
}

fn render_course(c: &Value) -> String {
    let course = text_or(c.get("course"), "Course");
    let institution = text_or(c.get("institution"), "");
    let year = text_or(c.get("year"), "");
    let hours = field_text(c.get("hours"))
        .map(|h| format!("{}h", html_escape(&h)))
        .unwrap_or_default();
    let materials: Vec<String> = list_texts(c.get("materials"))
        .iter()
        .map(|url| link_button("Material", url))
        .filter(|b| !b.is_empty())
        .collect();

    format!(
        r#"
    <div class="item">
      <h3>{}</h3>
      <div class="meta">{} • {} • {}</div>
      {}
    </div>"#,
        html_escape(&course),
        html_escape(&institution),
        html_escape(&year),
        hours,
        materials.join(" "),
    )
}
