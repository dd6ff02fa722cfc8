//! Crumb values: a title, an opaque link, and free-form options.

#[cfg(test)]
#[path = "crumb_test.rs"]
mod crumb_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary per-crumb attributes (CSS classes, data attributes, ...).
pub type Options = Map<String, Value>;

/// Link target of a crumb.
///
/// The trail never inspects this; the renderer decides what each variant
/// turns into. On the wire it is `null`, a string, or an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    /// A raw URL or path.
    Literal(String),
    /// A route descriptor resolved by the host.
    Structured(Map<String, Value>),
    /// Plain text crumb, not linked.
    #[default]
    Absent,
}

impl Link {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for Link {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for Link {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Map<String, Value>> for Link {
    fn from(value: Map<String, Value>) -> Self {
        Self::Structured(value)
    }
}

impl<T: Into<Link>> From<Option<T>> for Link {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// One entry of a breadcrumb trail.
///
/// Built with [`Crumb::new`] and the `with_*` methods, then moved into a
/// trail. Fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    title: String,
    #[serde(default)]
    link: Link,
    #[serde(default)]
    options: Options,
}

impl Crumb {
    /// A crumb with no link and empty options.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: Link::Absent,
            options: Options::new(),
        }
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<Link>) -> Self {
        self.link = link.into();
        self
    }

    /// Replace the options wholesale.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set a single option, overwriting any previous value for `key`.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn link(&self) -> &Link {
        &self.link
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl From<&str> for Crumb {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Crumb {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}
