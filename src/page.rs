//! The hosting page: the named slots the site reads and writes, and the
//! HTML shell they are serialised into.

use crate::render::html_escape;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Current URL fragment, e.g. `#/publications`.
    pub hash: String,
    pub document_title: String,
    pub site_title: String,
    pub name: String,
    pub name_foot: String,
    pub tagline: String,
    pub year: String,
    /// Rendered quick-link buttons, in display order.
    pub quick_links: Vec<String>,
    pub nav: Vec<NavLink>,
    /// Rendered HTML of the active section (or the load error block).
    pub content: String,
}

impl Page {
    pub fn new(hash: &str) -> Self {
        Page {
            hash: hash.to_string(),
            ..Default::default()
        }
    }

    /// Mark exactly the anchor whose href is `#/{id}` as active.
    pub fn set_active(&mut self, id: &str) {
        let target = format!("#/{}", id);
        for link in &mut self.nav {
            link.active = link.href == target;
        }
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.nav.iter().find(|l| l.active)
    }

    /// Serialise every slot into a complete HTML document.
    pub fn to_html(&self) -> String {
        let document_title = if self.document_title.is_empty() {
            "Portfolio"
        } else {
            self.document_title.as_str()
        };

        let nav_html: String = self
            .nav
            .iter()
            .map(|l| {
                format!(
                    r#"<a href="{}"{}>{}</a>"#,
                    l.href,
                    if l.active { r#" class="active""# } else { "" },
                    html_escape(&l.label)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{document_title}</title>
<style>{css}</style>
</head>
<body>
<header>
  <h1 id="site-title">{site_title}</h1>
  <div id="name">{name}</div>
  <p id="tagline">{tagline}</p>
  <div id="quick-links">{quick_links}</div>
  <nav id="nav">{nav}</nav>
</header>
<main id="content">{content}</main>
<footer>&copy; <span id="year">{year}</span> <span id="name-foot">{name_foot}</span></footer>
</body>
</html>
"#,
            document_title = html_escape(document_title),
            css = DEFAULT_CSS,
            site_title = html_escape(&self.site_title),
            name = html_escape(&self.name),
            tagline = html_escape(&self.tagline),
            quick_links = self.quick_links.join(""),
            nav = nav_html,
            content = self.content,
            year = html_escape(&self.year),
            name_foot = html_escape(&self.name_foot),
        )
    }
}

const DEFAULT_CSS: &str = r#"
:root{--bg:#fafafa;--fg:#1d1d1f;--muted:#6e6e73;--accent:#0a58ca;--line:#e5e5ea}
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,sans-serif;background:var(--bg);color:var(--fg);line-height:1.55}
header,main,footer{max-width:960px;margin:0 auto;padding:1rem 1.25rem}
#site-title{font-size:1.6rem;margin:.5rem 0 0}
#tagline{color:var(--muted);margin:.25rem 0 .75rem}
#quick-links{display:flex;flex-wrap:wrap;gap:.5rem}
nav{display:flex;flex-wrap:wrap;gap:1rem;border-bottom:1px solid var(--line);padding:.75rem 0;margin-top:1rem}
nav a{color:var(--muted);text-decoration:none}
nav a.active{color:var(--accent);font-weight:600}
.button{display:inline-block;padding:.35rem .75rem;border:1px solid var(--line);border-radius:6px;color:var(--fg);text-decoration:none;font-size:.9rem}
.button:hover{border-color:var(--accent);color:var(--accent)}
.grid-2{display:grid;grid-template-columns:2fr 1fr;gap:1.5rem}
.list{display:flex;flex-direction:column;gap:.75rem}
.item{padding:.75rem 1rem;border:1px solid var(--line);border-radius:8px;background:#fff}
.item h3{margin:0 0 .25rem;font-size:1.05rem}
.meta{color:var(--muted);font-size:.9rem}
.badge{display:inline-block;font-size:.75rem;padding:.1rem .45rem;margin-right:.3rem;border-radius:999px;background:#eef2ff;color:#3730a3}
.empty{color:var(--muted);font-style:italic}
footer{color:var(--muted);font-size:.85rem;border-top:1px solid var(--line);margin-top:2rem}
@media (max-width:720px){.grid-2{grid-template-columns:1fr}}
"#;
