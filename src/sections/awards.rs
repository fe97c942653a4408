use crate::models::cv::CvDocument;
use crate::render::{html_escape, list_or_empty, text_or};

pub fn render(doc: &CvDocument) -> String {
    let items: Vec<String> = doc
        .list(&["awards"])
        .iter()
        .map(|a| {
            format!(
                r#"
    <div class="item">
      <h3>{}</h3>
      <div class="meta">{}</div>
    </div>"#,
                html_escape(&text_or(a.get("name"), "Award")),
                html_escape(&text_or(a.get("year"), "")),
            )
        })
        .collect();

    format!(
        "<section><h2>Awards</h2>{}</section>",
        list_or_empty(&items, "No awards listed.")
    )
}
