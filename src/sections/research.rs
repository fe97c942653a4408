use crate::models::cv::CvDocument;
use crate::render::{html_escape, list_or_empty};

/// Research areas are derived from the tagline, one badge per segment.
pub fn render(doc: &CvDocument) -> String {
    let areas: Vec<String> = doc
        .research_areas()
        .iter()
        .map(|a| {
            format!(
                r#"<div class="item"><span class="badge">Area</span> {}</div>"#,
                html_escape(a)
            )
        })
        .collect();

    format!(
        "<section><h2>Research</h2>{}</section>",
        list_or_empty(&areas, "No research areas provided.")
    )
}
