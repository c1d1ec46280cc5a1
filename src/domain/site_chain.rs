//! Circular doubly-linked chain of sites.
//!
//! Sites live in a per-chain generational arena and are linked through
//! `prev`/`next` indices. The chain is kept sorted by [`site_order`] and the
//! head always points at the minimal site. An empty chain holds no head and
//! no stored sites.

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::{instrument, trace};

/// Orders site names by byte length first, then lexicographically.
pub fn site_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// One site in the chain. A singleton links to itself in both directions.
#[derive(Debug)]
struct SiteLink {
    name: String,
    prev: Index,
    next: Index,
}

/// Ordered circular chain of site names belonging to one ring.
#[derive(Debug, Default)]
pub struct SiteChain {
    sites: Arena<SiteLink>,
    head: Option<Index>,
}

impl SiteChain {
    pub fn new() -> Self {
        Self {
            sites: Arena::new(),
            head: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of sites, counted by walking once around the chain.
    pub fn len(&self) -> usize {
        let Some(head) = self.head else {
            return 0;
        };
        let mut count = 0;
        let mut curr = head;
        loop {
            count += 1;
            curr = self.sites[curr].next;
            if curr == head {
                break;
            }
        }
        count
    }

    /// Name of the minimal site.
    pub fn head(&self) -> Option<&str> {
        self.head.map(|idx| self.sites[idx].name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|site| site == name)
    }

    /// Site names from the head once around the chain.
    pub fn iter(&self) -> SiteIter<'_> {
        SiteIter {
            chain: self,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Inserts a site at its ordered position.
    ///
    /// Returns `false` and leaves the chain untouched when a site with the
    /// exact same name is already present.
    #[instrument(level = "trace", skip(self, name))]
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let Some(head) = self.head else {
            let idx = self.sites.insert_with(|idx| SiteLink {
                name,
                prev: idx,
                next: idx,
            });
            self.head = Some(idx);
            return true;
        };

        // First site ordered after `name`; lands back on head when `name` is the new maximum.
        let mut successor = head;
        for _ in 0..self.len() {
            match site_order(&self.sites[successor].name, &name) {
                Ordering::Less => successor = self.sites[successor].next,
                Ordering::Equal => {
                    trace!(site = %name, "duplicate site ignored");
                    return false;
                }
                Ordering::Greater => break,
            }
        }

        let predecessor = self.sites[successor].prev;
        let becomes_head = site_order(&name, &self.sites[head].name) == Ordering::Less;
        let idx = self.sites.insert(SiteLink {
            name,
            prev: predecessor,
            next: successor,
        });
        self.sites[predecessor].next = idx;
        self.sites[successor].prev = idx;
        if becomes_head {
            self.head = Some(idx);
        }
        true
    }

    /// Removes every site whose name satisfies `predicate` and returns how many were removed.
    #[instrument(level = "trace", skip(self, predicate))]
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let Some(head) = self.head else {
            return 0;
        };
        // The walk is bounded by the count taken before any site is unlinked.
        let count = self.len();
        let mut removed = 0;
        let mut curr = head;
        for _ in 0..count {
            let next = self.sites[curr].next;
            if predicate(&self.sites[curr].name) {
                self.unlink(curr);
                removed += 1;
            }
            curr = next;
        }
        removed
    }

    /// Detaches the minimal site and hands back its name.
    pub fn remove_smallest(&mut self) -> Option<String> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Releases every site. No-op on an empty chain.
    pub fn clear(&mut self) {
        self.sites.clear();
        self.head = None;
    }

    fn unlink(&mut self, idx: Index) -> Option<String> {
        let link = self.sites.remove(idx)?;
        if link.next == idx {
            self.head = None;
            return Some(link.name);
        }
        self.sites[link.prev].next = link.next;
        self.sites[link.next].prev = link.prev;
        if self.head == Some(idx) {
            self.head = Some(link.next);
        }
        Some(link.name)
    }
}

impl fmt::Display for SiteChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(", "))
    }
}

impl<'a> IntoIterator for &'a SiteChain {
    type Item = &'a str;
    type IntoIter = SiteIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks a chain once from its head.
#[derive(Debug)]
pub struct SiteIter<'a> {
    chain: &'a SiteChain,
    next: Option<Index>,
    remaining: usize,
}

impl<'a> Iterator for SiteIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.chain.sites.get(self.next?)?;
        self.remaining -= 1;
        self.next = Some(link.next);
        Some(link.name.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
