//! The navigable sections of the page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three content sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in navigation order.
    pub const ALL: [SectionId; 3] = [SectionId::About, SectionId::Projects, SectionId::Contact];

    /// The element id carried by the section.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a section identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}' (expected about, projects or contact)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
