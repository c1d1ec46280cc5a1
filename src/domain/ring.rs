//! A named web ring and the chain of sites it owns.

use std::fmt;

use tracing::trace;

use crate::domain::site_chain::SiteChain;

/// Payload of a ring tree node: the ring's name plus its site chain.
///
/// Moved by value when a two-child removal transplants a successor.
#[derive(Debug)]
pub struct Ring {
    name: String,
    sites: SiteChain,
}

impl Ring {
    /// Creates a ring with no sites.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "ring name must not be empty");
        Self {
            name,
            sites: SiteChain::new(),
        }
    }

    /// Creates a ring and adds every site in `sites`, dropping duplicates.
    pub fn with_sites<I, S>(name: impl Into<String>, sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ring = Self::new(name);
        for site in sites {
            ring.add_site(site);
        }
        ring
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sites(&self) -> &SiteChain {
        &self.sites
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Adds a site in chain order. Returns `false` for an exact duplicate.
    ///
    /// # Panics
    /// Panics if `site` is empty.
    pub fn add_site(&mut self, site: impl Into<String>) -> bool {
        let site = site.into();
        assert!(!site.is_empty(), "site name must not be empty");
        let added = self.sites.insert(site);
        trace!(ring = %self.name, added, "add site");
        added
    }

    pub(crate) fn remove_sites_matching<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        self.sites.remove_matching(predicate)
    }

    pub(crate) fn take_smallest_site(&mut self) -> Option<String> {
        self.sites.remove_smallest()
    }

    pub(crate) fn clear_sites(&mut self) {
        self.sites.clear();
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.site_count())?;
        if !self.sites.is_empty() {
            write!(f, ": {}", self.sites)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_example_sites_when_added_then_chain_is_ordered_without_duplicates() {
        let mut ring = Ring::new("A");
        assert!(ring.add_site("A"));
        assert!(ring.add_site("dog"));
        assert!(ring.add_site("cat"));
        assert!(!ring.add_site("cat"));

        assert_eq!(ring.site_count(), 3);
        assert_eq!(ring.sites().iter().collect::<Vec<_>>(), vec!["A", "cat", "dog"]);
    }

    #[test]
    fn given_ring_when_displayed_then_shows_name_count_and_sites() {
        let ring = Ring::with_sites("music", ["beat.io", "a.fm"]);
        assert_eq!(ring.to_string(), "music (2): a.fm, beat.io");
        assert_eq!(Ring::new("empty").to_string(), "empty (0)");
    }

    #[test]
    #[should_panic(expected = "ring name must not be empty")]
    fn given_empty_name_when_creating_ring_then_panics() {
        let _ = Ring::new("");
    }

    #[test]
    #[should_panic(expected = "site name must not be empty")]
    fn given_empty_site_when_adding_then_panics() {
        Ring::new("r").add_site("");
    }
}
