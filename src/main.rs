use clap::Parser;
use log::{error, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod loader;
mod models;
mod page;
mod render;
mod routes;
mod sections;
mod site;


use config::{Config, CONFIG_FILE};
use loader::Source;
use page::Page;
use site::{Event, Site};

/// Render the portfolio page for a CV document.
///
/// The first fragment is the page's initial location; each later one is
/// delivered as a hash change. The final page is written to `output` or stdout.
#[derive(Parser, Debug)]
#[command(name = "cvfolio", version)]
struct Cli {
    /// Base URL or directory holding data/cv.json (overrides cvfolio.toml).
    source: Option<String>,

    /// Fragments to visit in order, e.g. `#/publications`.
    hashes: Vec<String>,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = Config::load(Path::new(CONFIG_FILE))?;
    if let Some(source) = cli.source {
        config.source = source;
    }
    let hashes = cli.hashes;

    let initial = hashes.first().map(String::as_str).unwrap_or("");
    let mut page = Page::new(initial);

    let loaded = Source::parse(&config.source).and_then(|s| loader::load(&s, &config.data_path));
    let code = match loaded {
        Ok(doc) => {
            let site = Site::init(doc, &mut page);
            for hash in hashes.iter().skip(1) {
                // a fragment naming a nav link is replayed as a click on it
                let clicked = hash
                    .strip_prefix("#/")
                    .filter(|_| page.nav.iter().any(|l| l.href == *hash));
                if let Some(id) = clicked {
                    site.handle(&mut page, Event::NavClick(id.to_string()));
                }
                site.handle(&mut page, Event::HashChange(hash.clone()));
            }
            if let Some(link) = page.active_link() {
                info!("Active view: {}", link.label);
            }
            0
        }
        Err(e) => {
            error!("Could not load CV data: {}", e);
            page.content = loader::render_load_error(&e);
            1
        }
    };

    write_page(&page, config.output.as_ref())?;
    Ok(code)
}

fn write_page(page: &Page, output: Option<&PathBuf>) -> std::io::Result<()> {
    let html = page.to_html();
    match output {
        Some(path) => {
            fs::write(path, html)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(html.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}
