use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

// site configuration
//
// this struct contains all of the tunables used by the webapp.  the toml document is
// embedded at compile time, so every field has a default and a partial file is valid
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub router: RouterConfig,
    pub theme: ThemeConfig,
    pub contact: ContactConfig,
    pub effects: EffectsConfig,
    pub pages: Pages,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    // directory holding <page>.html fragments, relative to the document
    pub fragment_root: String,

    // fetched once at startup and injected above the content
    pub navbar_path: String,

    // route used when the location fragment is empty
    pub default_page: String,

    // fade-out time before the content container is swapped
    pub transition_ms: u32,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            fragment_root: "pages".to_owned(),
            navbar_path: "components/navbar.html".to_owned(),
            default_page: "home".to_owned(),
            transition_ms: 200,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub body_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            storage_key: "theme".to_owned(),
            body_class: "dark-mode".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_delay_ms: u32,
    pub success_rate: f64,
    pub banner_dismiss_ms: u32,
    pub message_max_chars: usize,

    // fraction of message_max_chars past which the counter warns
    pub warning_ratio: f64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            submit_delay_ms: 2000,
            success_rate: 0.9,
            banner_dismiss_ms: 5000,
            message_max_chars: 1000,
            warning_ratio: 0.9,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub ripple_ms: u32,
    pub typing_interval_ms: u32,
    pub navbar_hide_threshold: f64,
    pub parallax_rate: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            ripple_ms: 600,
            typing_interval_ms: 100,
            navbar_hide_threshold: 100.0,
            parallax_rate: -0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    // markup fetched from the fragment root
    Fragment,
    // rendered by the contact form controller
    Contact,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PageConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,

    // pages without a label are routable but not listed in the fallback navbar
    #[serde(default)]
    pub nav_label: Option<String>,

    #[serde(default = "fragment_kind")]
    pub kind: PageKind,

    // overrides <fragment_root>/<id>.html
    #[serde(default)]
    pub path: Option<String>,
}

fn fragment_kind() -> PageKind {
    PageKind::Fragment
}

// newtype so that an empty [[pages]] list still gets the stock site map
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pages(pub Vec<PageConfig>);

impl Default for Pages {
    fn default() -> Self {
        let page = |id: &str, title: &str, description: &str, kind: PageKind| PageConfig {
            id: id.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            nav_label: Some(title.to_owned()),
            kind,
            path: None,
        };

        Pages(vec![
            page("home", "Home", "Personal portfolio", PageKind::Fragment),
            page("about", "About", "Background and skills", PageKind::Fragment),
            page("projects", "Projects", "Selected work", PageKind::Fragment),
            page("resume", "Resume", "Experience and education", PageKind::Fragment),
            page("contact", "Contact", "Get in touch", PageKind::Contact),
        ])
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

// a broken config should never take the site down, so fall back to the defaults
#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> SiteConfig {
    debug!("reading site config");

    match parse_config(doc) {
        Ok(config) => {
            debug!("successfully parsed site config");
            config
        }
        Err(err) => {
            error!("failed to parse site config, using defaults: {err}");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_defaults() {
        assert_eq!(parse_config("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let doc = r#"
            [config.contact]
            submit_delay_ms = 10
        "#;

        let config = parse_config(doc).unwrap();

        assert_eq!(config.contact.submit_delay_ms, 10);
        assert_eq!(config.contact.message_max_chars, 1000);
        assert_eq!(config.router.fragment_root, "pages");
        assert_eq!(config.pages.0.len(), 5);
    }

    #[test]
    fn pages_replace_stock_map() {
        let doc = r#"
            [[config.pages]]
            id = "blog"
            title = "Blog"
            path = "posts/index.html"

            [[config.pages]]
            id = "contact"
            title = "Contact"
            nav_label = "Say hi"
            kind = "contact"
        "#;

        let config = parse_config(doc).unwrap();

        assert_eq!(config.pages.0.len(), 2);
        assert_eq!(config.pages.0[0].kind, PageKind::Fragment);
        assert_eq!(config.pages.0[0].nav_label, None);
        assert_eq!(config.pages.0[1].kind, PageKind::Contact);
    }

    #[test]
    fn broken_document_falls_back() {
        let config = read_config("[config.router\nfragment_root = ");

        assert_eq!(config, SiteConfig::default());
    }
}
