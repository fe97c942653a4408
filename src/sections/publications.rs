use serde_json::Value;

use crate::models::cv::CvDocument;
use crate::render::{badge, field_text, html_escape, link_maybe, list_or_empty, list_texts, text_or};

pub fn render(doc: &CvDocument) -> String {
    let items: Vec<String> = doc
        .publications_by_year()
        .into_iter()
        .map(render_publication)
        .collect();

    format!(
        "<section><h2>Publications</h2>{}</section>",
        list_or_empty(&items, "No publications yet.")
    )
}

fn render_publication(p: &Value) -> String {
    let title = text_or(p.get("title"), "Untitled");
    let authors = list_texts(p.get("authors")).join(", ");
    let venue = text_or(p.get("venue"), "");
    let year = text_or(p.get("year"), "");
    let tags: String = list_texts(p.get("tags")).iter().map(|t| badge(t)).collect();

    // links.doi wins over the legacy top-level doi
    let doi = field_text(p.get("links").and_then(|l| l.get("doi")))
        .or_else(|| field_text(p.get("doi")));
    let publisher = field_text(p.get("links").and_then(|l| l.get("publisher")));

    format!(
        r#"
    <div class="item">
      <h3>{}</h3>
      <div class="meta">{} • {} • {}</div>
      <div>{}</div>
      <div>{} {}</div>
    </div>"#,
        html_escape(&title),
        html_escape(&authors),
        html_escape(&venue),
        html_escape(&year),
        tags,
        link_maybe("DOI", doi.as_deref()),
        link_maybe("Publisher", publisher.as_deref()),
    )
}
