use log::{info, warn};

use crate::models::cv::CvDocument;
use crate::sections;

pub type RenderFn = fn(&CvDocument) -> String;

/// A fragment-addressable view: `#/{id}` renders `render(doc)`.
#[derive(Clone, Copy)]
pub struct Route {
    pub id: &'static str,
    pub label: &'static str,
    pub render: RenderFn,
}

impl Route {
    pub fn href(&self) -> String {
        format!("#/{}", self.id)
    }
}

/// Registered routes in navigation order. The first is the fallback.
pub static ROUTES: [Route; 7] = [
    Route { id: "about", label: "About", render: sections::about::render },
    Route { id: "research", label: "Research", render: sections::research::render },
    Route { id: "publications", label: "Publications", render: sections::publications::render },
    Route { id: "teaching", label: "Teaching", render: sections::teaching::render },
    Route { id: "awards", label: "Awards", render: sections::awards::render },
    Route { id: "service", label: "Service", render: sections::service::render },
    Route { id: "contact", label: "Contact", render: sections::contact::render },
];

const DEFAULT_ROUTE: &str = "about";

/// Route id named by a URL fragment: a leading `#/` is stripped and an
/// empty remainder means `about`.
pub fn route_id(hash: &str) -> &str {
    let id = hash.strip_prefix("#/").unwrap_or(hash);
    if id.is_empty() {
        DEFAULT_ROUTE
    } else {
        id
    }
}

/// Exact-match lookup; unknown ids fall back to the first route.
pub fn resolve<'a>(routes: &'a [Route], hash: &str) -> Option<&'a Route> {
    let id = route_id(hash);
    match routes.iter().find(|r| r.id == id) {
        Some(route) => Some(route),
        None => {
            let fallback = routes.first();
            if let Some(route) = fallback {
                warn!("Unknown route '{}', showing '{}'", id, route.id);
            }
            fallback
        }
    }
}

/// Resolve a fragment and render the matched view.
///
/// Pure in the fragment and the document: no state is kept between calls,
/// so calling it again with the same fragment gives the same content.
pub fn render_for_hash<'a>(
    routes: &'a [Route],
    hash: &str,
    doc: &CvDocument,
) -> Option<(&'a Route, String)> {
    let route = resolve(routes, hash)?;
    info!("Rendering route '{}'", route.id);
    Some((route, (route.render)(doc)))
}
