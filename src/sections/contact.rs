use crate::models::cv::CvDocument;
use crate::render::{capitalize, html_escape, link_button};

/// Email button, location line and one button per profile, each only when present.
pub fn render(doc: &CvDocument) -> String {
    let email = match doc.text(&["meta", "email"]) {
        Some(e) => format!(
            r#"<a class="button" href="mailto:{}">{}</a>"#,
            e,
            html_escape(&e)
        ),
        None => String::new(),
    };
    let location = match doc.text(&["meta", "location"]) {
        Some(l) => format!(r#"<div class="meta">Location: {}</div>"#, html_escape(&l)),
        None => String::new(),
    };
    let links: Vec<String> = doc
        .profiles()
        .iter()
        .map(|(key, url)| link_button(&html_escape(&capitalize(key)), url))
        .collect();

    format!(
        r#"<section><h2>Contact</h2>{}{}<div style="margin-top:.5rem">{}</div></section>"#,
        email,
        location,
        links.join(" ")
    )
}
