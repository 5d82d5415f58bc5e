use constcat::concat;

mod components;
mod enhancements;
mod variables;

pub use components::BASE_COMPONENTS;
pub use enhancements::ENHANCEMENTS;
pub use variables::CSS_VARIABLES;

// everything the site needs on top of bootstrap, injected once by the root component
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
body {
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-page) ease, color var(--transition-page) ease;
}

a {
  color: var(--primary);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    ENHANCEMENTS,
);
