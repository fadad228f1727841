//! DomainTag bucket key
//!
//! Entities are bucketed by `"<domain>"`, or `"<domain>:<device_class>"` for
//! the class-qualified domains (`sensor`, `binary_sensor`) when the class is
//! one of the known classes for that domain.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::domains;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainTag {
    domain: String,
    device_class: Option<String>,
}

impl DomainTag {
    /// Derive the tag for an entity of `domain` with an optional device class
    pub fn new(domain: impl Into<String>, device_class: Option<&str>) -> Self {
        let domain = domain.into();
        let device_class = device_class
            .filter(|class| {
                domains::is_class_qualified(&domain)
                    && domains::device_classes(&domain).contains(class)
            })
            .map(str::to_string);
        Self {
            domain,
            device_class,
        }
    }

    /// Tag for the bare domain, without a device class
    pub fn bare(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            device_class: None,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn device_class(&self) -> Option<&str> {
        self.device_class.as_deref()
    }

    /// Check if this tag selects entities of `domain` and, when given,
    /// `device_class`. A missing class matches every tag of the domain.
    pub fn matches(&self, domain: &str, device_class: Option<&str>) -> bool {
        self.domain == domain
            && device_class.map_or(true, |class| self.device_class() == Some(class))
    }
}

impl fmt::Display for DomainTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.device_class {
            Some(class) => write!(f, "{}:{}", self.domain, class),
            None => f.write_str(&self.domain),
        }
    }
}

impl FromStr for DomainTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once(':') {
            Some((domain, class)) => Self::new(domain, Some(class)),
            None => Self::bare(s),
        })
    }
}

impl TryFrom<String> for DomainTag {
    type Error = Infallible;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DomainTag> for String {
    fn from(tag: DomainTag) -> String {
        tag.to_string()
    }
}
