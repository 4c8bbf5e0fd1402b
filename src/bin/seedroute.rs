//! Command-line presenter for the seed catalog router.
//!
//! `resolve` answers one path, `navigate` replays a stream of fragment
//! changes through a route store, `routes` lists every addressable path and
//! `validate` checks a catalog document. Pages print as text or, with
//! `--json`, one JSON object per line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedroute::{
    CatalogRepository, MemoryNavigator, MergePolicy, Navigator, PageDescriptor, PageLink, Route,
    RouteStore, SiteConfig, SiteInfo, Variety, addressable_routes, nav_links, resolve, telemetry,
};
use serde::Serialize;
use std::cell::RefCell;
use std::io::{BufRead, Write, stdin, stdout};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(name = "seedroute", version)]
#[command(about = "Resolve hash-fragment routes against the seed catalog")]
struct Cli {
    /// Catalog document to use instead of the bundled one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Which season wins when a category id is defined in both.
    #[arg(long, global = true)]
    merge_policy: Option<MergePolicy>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single path or fragment and print the page.
    Resolve {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Read one fragment per stdin line and print every published page.
    Navigate {
        /// Fragment present before the first navigation (empty triggers the
        /// redirect to home).
        #[arg(long, default_value = "")]
        initial: String,
        #[arg(long)]
        json: bool,
    },
    /// List every addressable route path.
    Routes,
    /// Validate a catalog document and report its size.
    Validate {
        /// Catalog file; defaults to --catalog or the bundled catalog.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose)?;

    let config = SiteConfig::from_env()?.with_overrides(cli.catalog, cli.merge_policy);

    match cli.command {
        Command::Resolve { path, json } => {
            let catalog = config.load_catalog()?;
            let route = Route::from_fragment(&path);
            print_page(&route, &catalog, json)
        }
        Command::Navigate { initial, json } => {
            let catalog = config.load_catalog()?;
            navigate(&catalog, &initial, json)
        }
        Command::Routes => {
            let catalog = config.load_catalog()?;
            let mut out = stdout().lock();
            for route in addressable_routes(&catalog) {
                writeln!(out, "{route}")?;
            }
            Ok(())
        }
        Command::Validate { file } => {
            let config = config.with_overrides(file, None);
            let catalog = config.load_catalog()?;
            println!(
                "catalog ok: {} categories, {} varieties ({})",
                catalog.categories().count(),
                catalog.variety_count(),
                catalog.merge_policy()
            );
            Ok(())
        }
    }
}

fn navigate(catalog: &CatalogRepository, initial: &str, json: bool) -> Result<()> {
    let navigator = Rc::new(MemoryNavigator::with_fragment(initial));
    let store = RouteStore::attach(Rc::clone(&navigator));

    let published: Rc<RefCell<Vec<Route>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&published);
    store.subscribe(move |route| sink.borrow_mut().push(route.clone()));

    print_page(&store.current(), catalog, json)?;

    for line in stdin().lock().lines() {
        let line = line.context("reading navigation input")?;
        navigator.navigate(line.trim());
        let routes: Vec<Route> = published.borrow_mut().drain(..).collect();
        for route in routes {
            print_page(&route, catalog, json)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct PageRecord<'a> {
    path: String,
    route: &'a Route,
    page: PageDescriptor<'a>,
    links: Vec<PageLink>,
}

fn print_page(route: &Route, catalog: &CatalogRepository, json: bool) -> Result<()> {
    let page = resolve(route, catalog);
    let mut out = stdout().lock();
    if json {
        let links = page.links();
        let record = PageRecord {
            path: route.to_path(),
            route,
            page,
            links,
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    } else {
        render_text(&mut out, &page, catalog.site())?;
    }
    Ok(())
}

fn render_text(out: &mut impl Write, page: &PageDescriptor<'_>, site: &SiteInfo) -> Result<()> {
    let nav = nav_links()
        .iter()
        .map(|link| format!("{} <{}>", link.label, link.href()))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "== {} ==  {nav}", site.name)?;

    match page {
        PageDescriptor::HomePage => writeln!(out, "\nWelcome to {}.", site.name)?,
        PageDescriptor::ProductsIndexPage { winter, spring } => {
            writeln!(out, "\nProducts")?;
            for season in [winter, spring] {
                writeln!(out, "\n{}", season.label)?;
                for entry in season.groups {
                    let route = Route::group(entry.id.as_str());
                    writeln!(out, "  - {} <{}>", entry.title, route.href())?;
                }
            }
        }
        PageDescriptor::GroupPage {
            group,
            title,
            varieties,
        } => {
            writeln!(out, "\n{title}")?;
            if varieties.is_empty() {
                writeln!(out, "\nNo varieties listed.")?;
            }
            for variety in varieties.iter() {
                render_variety(out, variety)?;
                let route = Route::variety(*group, &variety.slug);
                writeln!(out, "  <{}>", route.href())?;
            }
        }
        PageDescriptor::VarietyPage { title, variety, .. } => {
            writeln!(out, "\n{title}")?;
            render_variety(out, variety)?;
        }
        PageDescriptor::VarietyNotFound { .. } => writeln!(out, "\nVariety not found.")?,
        PageDescriptor::ContactsPage => render_contacts(out, site)?,
    }

    let links = page.links();
    if matches!(page, PageDescriptor::VarietyPage { .. } | PageDescriptor::VarietyNotFound { .. })
        && !links.is_empty()
    {
        writeln!(out)?;
        for link in links {
            writeln!(out, "[{}] <{}>", link.label, link.href())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn render_variety(out: &mut impl Write, variety: &Variety) -> Result<()> {
    let (title, note) = variety.heading();
    writeln!(out, "\n* {title}")?;
    if let Some(note) = note {
        writeln!(out, "  ({note})")?;
    }
    writeln!(out, "  Agronomic Characteristics")?;
    for item in &variety.agronomic {
        writeln!(out, "    - {item}")?;
    }
    writeln!(out, "  Disease Resistance")?;
    for item in &variety.disease {
        writeln!(out, "    - {item}")?;
    }
    Ok(())
}

fn render_contacts(out: &mut impl Write, site: &SiteInfo) -> Result<()> {
    writeln!(out, "\nContacts")?;
    if !site.address.is_empty() {
        writeln!(out, "\nAddress")?;
        for line in &site.address {
            writeln!(out, "  {line}")?;
        }
    }
    for contact in &site.contacts {
        writeln!(out, "\n{}", contact.name)?;
        if let Some(role) = &contact.role {
            writeln!(out, "  {role}")?;
        }
        for phone in &contact.phones {
            match &phone.label {
                Some(label) => writeln!(out, "  {} ({label})", phone.number)?,
                None => writeln!(out, "  {}", phone.number)?,
            }
        }
        if let Some(email) = &contact.email {
            writeln!(out, "  {email}")?;
        }
    }
    Ok(())
}
