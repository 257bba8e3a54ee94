//! The page footer.
//!
//! The footer is a pure function of the current year and the site's links.
//! The year comes from an injected [`Clock`] so renders are reproducible.

use chrono::Datelike;
use serde::Serialize;

use crate::content::SiteContent;

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock stuck in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Everything `footer.html` renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub year: i32,
    pub owner: String,
    pub github: String,
    pub linkedin: String,
}

impl FooterView {
    pub fn new(content: &SiteContent, clock: &dyn Clock) -> Self {
        Self {
            year: clock.current_year(),
            owner: content.profile.name.clone(),
            github: content.links.github.clone(),
            linkedin: content.links.linkedin.clone(),
        }
    }

    /// The copyright line, e.g. `© 2024 Vivek Raj. All rights reserved.`
    pub fn copyright(&self) -> String {
        format!("\u{a9} {} {}. All rights reserved.", self.year, self.owner)
    }
}
