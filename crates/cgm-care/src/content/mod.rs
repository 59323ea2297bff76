//! Server-rendered marketing pages, static catalog data, and JSON-LD structured data.

pub mod catalog;
mod html;
pub mod layout;
pub mod pages;
pub mod router;
pub mod structured_data;
pub mod wizard_view;

pub use pages::Page;
pub use router::content_router;

use crate::config::SiteConfig;

pub const DEFAULT_SITE_URL: &str = "https://cgmcare.com";

/// Site-wide settings shared by every rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    base_url: String,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

impl SiteContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a site path such as `/pricing`.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return format!("{}/", self.base_url);
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
