//! Site initialisation and navigation.
//!
//! `Site::init` fills the page chrome once from the CV document, builds the
//! navigation from the route table and renders the view for the current
//! fragment. Afterwards the page only changes through `Site::handle`.

use chrono::Datelike;
use log::info;

use crate::models::cv::CvDocument;
use crate::page::{NavLink, Page};
use crate::render::link_button;
use crate::routes::{self, Route, ROUTES};

const DEFAULT_NAME: &str = "Your Name";

/// Page events, standing in for DOM listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The URL fragment changed; the router runs again.
    HashChange(String),
    /// A navigation anchor was clicked; only its active state changes.
    NavClick(String),
}

pub struct Site {
    doc: CvDocument,
    routes: &'static [Route],
}

impl Site {
    pub fn init(doc: CvDocument, page: &mut Page) -> Self {
        let title = doc.site_title();
        let name = doc.name().unwrap_or_else(|| DEFAULT_NAME.to_string());

        page.document_title = title.clone();
        page.site_title = title;
        page.name = name.clone();
        page.name_foot = name;
        page.tagline = doc.tagline().unwrap_or_default();
        page.year = chrono::Local::now().year().to_string();
        page.quick_links = quick_links(&doc);

        let site = Site { doc, routes: &ROUTES };
        page.nav = site
            .routes
            .iter()
            .map(|r| NavLink {
                href: r.href(),
                label: r.label.to_string(),
                active: false,
            })
            .collect();

        info!(
            "Site initialised for '{}' with {} routes",
            page.site_title,
            site.routes.len()
        );
        site.route(page);
        site
    }

    /// Resolve the page's fragment and replace the content with that view.
    pub fn route(&self, page: &mut Page) {
        let Some((route, content)) = routes::render_for_hash(self.routes, &page.hash, &self.doc) else {
            return;
        };
        page.set_active(route.id);
        page.content = content;
    }

    pub fn handle(&self, page: &mut Page, event: Event) {
        match event {
            Event::HashChange(hash) => {
                page.hash = hash;
                self.route(page);
            }
            Event::NavClick(id) => page.set_active(&id),
        }
    }
}

/// Buttons for the CV PDF and known profiles, in fixed order, present fields only.
pub fn quick_links(doc: &CvDocument) -> Vec<String> {
    let fields: [(&str, &[&str]); 5] = [
        ("Download CV (PDF)", &["meta", "cv_pdf"]),
        ("ORCID", &["meta", "profiles", "orcid"]),
        ("Google Scholar", &["meta", "profiles", "scholar"]),
        ("Scopus", &["meta", "profiles", "scopus"]),
        ("LinkedIn", &["meta", "profiles", "linkedin"]),
    ];
    fields
        .iter()
        .filter_map(|(label, path)| doc.text(path).map(|url| link_button(label, &url)))
        .collect()
}
