use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::warn;

use crate::{
    PAGE_ID_REGEX,
    config::{PageKind, RouterConfig, SiteConfig},
};

static PAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAGE_ID_REGEX).expect("page id regex is valid"));

// a route token taken from the location fragment
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn parse(raw: &str) -> Option<Self> {
        PAGE_ID.is_match(raw).then(|| PageId(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSource {
    Fragment(String),
    Contact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: PageId,
    pub title: String,
    pub description: String,
    pub nav_label: Option<String>,
    pub source: PageSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Page(RouteEntry),
    // the token could not be a page id at all, so there is nothing to fetch
    Invalid(String),
}

// page id -> fragment location
//
// pages listed in the config carry their own title and navigation label; anything else
// that looks like a page id is assumed to live at <fragment_root>/<id>.html and is left
// for the fetch to discover
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable {
    router: RouterConfig,
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(config: &SiteConfig) -> Self {
        let router = config.router.clone();

        let entries = config
            .pages
            .0
            .iter()
            .filter_map(|page| {
                let id = PageId::parse(&page.id)?;
                let source = match page.kind {
                    PageKind::Contact => PageSource::Contact,
                    PageKind::Fragment => PageSource::Fragment(
                        page.path
                            .clone()
                            .unwrap_or_else(|| fragment_path(&router, &id)),
                    ),
                };

                Some(RouteEntry {
                    id,
                    title: page.title.clone(),
                    description: page.description.clone(),
                    nav_label: page.nav_label.clone(),
                    source,
                })
            })
            .collect();

        RouteTable { router, entries }
    }

    pub fn resolve(&self, raw: &str) -> Route {
        let Some(id) = PageId::parse(raw) else {
            return Route::Invalid(raw.to_owned());
        };

        match self.entries.iter().find(|e| e.id == id) {
            Some(entry) => Route::Page(entry.clone()),
            None => Route::Page(RouteEntry {
                source: PageSource::Fragment(fragment_path(&self.router, &id)),
                title: id.to_string(),
                description: String::new(),
                nav_label: None,
                id,
            }),
        }
    }

    // the location fragment doubles as the route, e.g. "#about" or "" for the default
    pub fn page_from_hash<'a>(&'a self, hash: &'a str) -> &'a str {
        match hash.trim_start_matches('#') {
            "" => &self.router.default_page,
            page => page,
        }
    }

    // a hashchange only navigates when it names a page other than the one showing, which
    // is what keeps a link click (page first, then hash) from loading twice
    pub fn hash_navigation<'a>(&'a self, hash: &'a str, current: &str) -> Option<&'a str> {
        let page = self.page_from_hash(hash);
        (page != current).then_some(page)
    }

    pub fn resolve_hash(&self, hash: &str) -> Route {
        self.resolve(self.page_from_hash(hash))
    }

    pub fn nav_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|e| e.nav_label.is_some())
    }

    pub fn navbar_path(&self) -> &str {
        &self.router.navbar_path
    }

    pub fn default_page(&self) -> &str {
        &self.router.default_page
    }
}

// the location fragment a navigation click should write
//
// anything outside the page id charset would come back percent-encoded on the next
// hashchange and no longer match, so those clicks leave the location alone
pub fn hash_for_page(page: &str) -> Option<&str> {
    PageId::parse(page).map(|_| page)
}

// which navigation link to mark active, given (data-page, clicked) for every link in
// document order.  a clicked link wins, otherwise the first link for page.  at most one
// index comes back, so at most one link is ever active
pub fn active_link(links: &[(Option<String>, bool)], page: &str) -> Option<usize> {
    links.iter().position(|(_, clicked)| *clicked).or_else(|| {
        links
            .iter()
            .position(|(target, _)| target.as_deref() == Some(page))
    })
}

pub const NOT_FOUND_MESSAGE: &str = "Page not found.";

// what the content container shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Markup(String),
    Contact,
    NotFound,
}

impl PageView {
    // a failed fetch is a missing page, whatever the reason
    pub fn from_fetch(result: anyhow::Result<String>) -> Self {
        match result {
            Ok(markup) => PageView::Markup(markup),
            Err(err) => {
                warn!("failed to load page fragment: {err}");
                PageView::NotFound
            }
        }
    }
}

fn fragment_path(router: &RouterConfig, id: &PageId) -> String {
    format!("{}/{}.html", router.fragment_root.trim_end_matches('/'), id)
}
