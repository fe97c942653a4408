use crate::models::cv::CvDocument;
use crate::render::{html_escape, list_or_empty, list_texts, text_with_breaks};

const DEFAULT_BIO: &str = "Add a short bio in about.summary_md";

/// Two columns: the bio on the left, key points on the right.
pub fn render(doc: &CvDocument) -> String {
    let summary = doc
        .text(&["about", "summary_md"])
        .unwrap_or_else(|| DEFAULT_BIO.to_string());

    let keypoints: Vec<String> = list_texts(doc.get(&["about", "keypoints"]))
        .iter()
        .map(|k| format!(r#"<div class="item">{}</div>"#, html_escape(k)))
        .collect();

    format!(
        r#"<section><h2>About</h2>
  <div class="grid-2">
    <div>{}</div>
    <div>{}</div>
  </div></section>"#,
        text_with_breaks(&summary),
        list_or_empty(&keypoints, "No highlights yet.")
    )
}
