//! Controller configuration.
//!
//! Defaults match the stock landing page markup and utility classes,
//! so most sites only override `sections`.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::section::Fallback;
use crate::style::StyleGroup;

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_ACTIVATION_THRESHOLD: f64 = 100.0;

const DEFAULT_SECTIONS: [&str; 8] = [
    "hero",
    "about",
    "skills",
    "services",
    "portfolio",
    "testimonials",
    "blog",
    "contact",
];

/// Behavior and markup contract of a [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Section ids in registration order. Missing elements are skipped.
    pub sections: Vec<String>,

    /// Scroll offset past which the nav gets the scrolled style.
    pub scroll_threshold: f64,

    /// Distance from the viewport top of the line that selects the active section.
    pub activation_threshold: f64,

    /// What to report when no section straddles the activation line.
    pub fallback: Fallback,

    /// Classes applied to nav controls targeting the active section.
    pub highlight_classes: Vec<String>,

    /// Classes applied to the primary nav once scrolled.
    pub scrolled_classes: Vec<String>,

    /// Class that hides the drawer panel and the inactive icon.
    pub hidden_class: String,

    pub markup: Markup,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            fallback: Fallback::default(),
            highlight_classes: vec![
                "text-blue-600".into(),
                "dark:text-blue-400".into(),
                "font-medium".into(),
            ],
            scrolled_classes: vec![
                "bg-white/80".into(),
                "dark:bg-gray-900/80".into(),
                "backdrop-blur-lg".into(),
                "shadow-lg".into(),
            ],
            hidden_class: "hidden".into(),
            markup: Markup::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document and validate it. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the registered sections.
    pub fn sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections = sections.into_iter().map(Into::into).collect();
        self
    }

    pub fn scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    pub fn activation_threshold(mut self, threshold: f64) -> Self {
        self.activation_threshold = threshold;
        self
    }

    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, id) in self.sections.iter().enumerate() {
            if id.is_empty() {
                return Err(ConfigError::EmptySectionId(index));
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateSection(id.clone()));
            }
        }

        for (name, value) in [
            ("scrollThreshold", self.scroll_threshold),
            ("activationThreshold", self.activation_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        if self.hidden_class.trim().is_empty() {
            return Err(ConfigError::EmptyHiddenClass);
        }

        self.markup.validate()
    }

    pub fn highlight_group(&self) -> StyleGroup {
        StyleGroup::new(self.highlight_classes.iter().cloned())
    }

    pub fn scrolled_group(&self) -> StyleGroup {
        StyleGroup::new(self.scrolled_classes.iter().cloned())
    }

    pub fn hidden_group(&self) -> StyleGroup {
        StyleGroup::new([self.hidden_class.clone()])
    }
}

/// Selectors and attribute names the page markup is expected to carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markup {
    /// Selector of the primary nav element.
    pub nav_selector: String,
    /// Boolean attribute marking the drawer panel.
    pub drawer_attr: String,
    /// Boolean attribute marking the drawer toggle.
    pub toggle_attr: String,
    /// Attribute tagging the open and close glyphs inside the toggle.
    pub icon_attr: String,
    /// Attribute carrying a control's target section id.
    pub target_attr: String,
    /// Expanded indicator set on the toggle.
    pub expanded_attr: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            nav_selector: "nav".into(),
            drawer_attr: "data-mobile-nav".into(),
            toggle_attr: "data-menu-toggle".into(),
            icon_attr: "data-icon".into(),
            target_attr: "data-scroll-to".into(),
            expanded_attr: "aria-expanded".into(),
        }
    }
}

impl Markup {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (name, value) in [
            ("navSelector", &self.nav_selector),
            ("drawerAttr", &self.drawer_attr),
            ("toggleAttr", &self.toggle_attr),
            ("iconAttr", &self.icon_attr),
            ("targetAttr", &self.target_attr),
            ("expandedAttr", &self.expanded_attr),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyMarkupName(name));
            }
        }
        Ok(())
    }

    /// Selector matching elements that carry `attr`.
    pub fn attr_selector(attr: &str) -> String {
        format!("[{attr}]")
    }

    /// Selector matching elements whose `attr` equals `value`.
    pub fn attr_value_selector(attr: &str, value: &str) -> String {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("[{attr}=\"{escaped}\"]")
    }
}
