//! Service page: editorial roles, peer review, program committees and chairs.
//! The four sub-blocks always appear in that order; peer review only when a
//! reviewing summary exists.

use serde_json::Value;

use crate::models::cv::CvDocument;
use crate::render::{badge, html_escape, is_present, list_texts, section_block, text_or};

pub fn render(doc: &CvDocument) -> String {
    let mut blocks = Vec::with_capacity(4);

    let editorial: Vec<String> = doc
        .list(&["service", "editorial"])
        .iter()
        .map(render_editorial)
        .collect();
    blocks.push(section_block("Editorial Roles", &editorial));

    if let Some(rs) = doc.get(&["service", "reviewing_summary"]).filter(|v| is_present(v)) {
        blocks.push(section_block("Peer Review", &[render_review_summary(rs)]));
    }

    let tpc: Vec<String> = doc
        .list(&["service", "tpc"])
        .iter()
        .map(|t| {
            format!(
                r#"
    <div class="item"><h3>{}</h3><div class="meta">{}</div></div>"#,
                html_escape(&text_or(t.get("event"), "")),
                html_escape(&list_texts(t.get("years")).join(", ")),
            )
        })
        .collect();
    blocks.push(section_block("Technical Program Committees", &tpc));

    let chairs: Vec<String> = doc
        .list(&["service", "chairs"])
        .iter()
        .map(|c| {
            format!(
                r#"
    <div class="item"><h3>{}</h3><div class="meta">{}</div></div>"#,
                html_escape(&text_or(c.get("event"), "")),
                html_escape(&text_or(c.get("role"), "")),
            )
        })
        .collect();
    blocks.push(section_block("Chairs", &chairs));

    format!("<section><h2>Service</h2>{}</section>", blocks.concat())
}

fn render_editorial(e: &Value) -> String {
    let badges: Vec<String> = list_texts(e.get("responsibilities"))
        .iter()
        .map(|r| badge(r))
        .collect();
    format!(
        r#"
    <div class="item"><h3>{}</h3>
    <div class="meta">{} • {} – {}</div>
    <div>{}</div></div>"#,
        html_escape(&text_or(e.get("role"), "Role")),
        html_escape(&text_or(e.get("journal"), "Journal")),
        html_escape(&text_or(e.get("start"), "")),
        html_escape(&text_or(e.get("end"), "present")),
        badges.join(" "),
    )
}

fn render_review_summary(rs: &Value) -> String {
    let focus: Vec<String> = list_texts(rs.get("focus")).iter().map(|f| badge(f)).collect();
    format!(
        r#"<div class="item"><div class="meta">Total reviews: {}</div>
    <div>{}</div></div>"#,
        html_escape(&text_or(rs.get("total_reviews"), "0")),
        focus.join(" "),
    )
}
