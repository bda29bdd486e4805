// file: src/models/raw_page.rs
// description: page record as returned by the wp/v2 pages endpoint
// reference: https://developer.wordpress.org/rest-api/reference/pages/

use serde::{Deserialize, Serialize};

/// Only the fields the index reads. Missing and `null` both default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub title: Option<Rendered>,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub excerpt: Option<Rendered>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: Option<String>,
}

impl RawPage {
    pub fn new(title: &str, link: &str, excerpt: &str) -> Self {
        Self {
            title: Some(Rendered::from(title)),
            link: Some(link.to_string()),
            excerpt: Some(Rendered::from(excerpt)),
        }
    }

    pub fn title_html(&self) -> &str {
        Self::rendered(self.title.as_ref())
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn excerpt_html(&self) -> &str {
        Self::rendered(self.excerpt.as_ref())
    }

    fn rendered(field: Option<&Rendered>) -> &str {
        field
            .and_then(|r| r.rendered.as_deref())
            .unwrap_or_default()
    }
}

impl From<&str> for Rendered {
    fn from(value: &str) -> Self {
        Self {
            rendered: Some(value.to_string()),
        }
    }
}
