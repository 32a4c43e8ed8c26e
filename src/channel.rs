use serde::{Deserialize, Serialize};
use std::fmt;

/// Native logging destination: `subsystem/category` in os_log terms.
///
/// Derived once from a logger label of the form `"domain/category"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    domain: String,
    category: String,
}

impl Channel {
    /// Channel from an explicit domain and category
    pub fn new(domain: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            category: category.into(),
        }
    }

    /// Split a label on `/`, ignoring empty segments.
    ///
    /// One segment gives `(segment, "")`, two give `(first, second)`. Anything
    /// else, including the empty label, keeps the whole label as the domain.
    pub fn from_label(label: &str) -> Self {
        let segments: Vec<&str> = label.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [domain] => Self::new(*domain, ""),
            [domain, category] => Self::new(*domain, *category),
            _ => Self::new(label, ""),
        }
    }

    /// os_log subsystem
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// os_log category, empty when the label had none
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_empty() {
            f.write_str(&self.domain)
        } else {
            write!(f, "{}/{}", self.domain, self.category)
        }
    }
}
