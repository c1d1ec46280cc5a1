//! Whole-network algorithms: purging, dead-link removal, length totals,
//! scavenging and teardown.
//!
//! Bottom-up passes walk a post-order snapshot of `(node, slot)` pairs
//! instead of recursing, so a degenerate tree cannot exhaust the stack.

use generational_arena::Index;
use tracing::{debug, info, instrument, trace};

use crate::domain::ring::Ring;
use crate::domain::ring_tree::{RingTree, Slot};

impl RingTree {
    /// Removes every ring holding fewer than `min_sites` sites.
    ///
    /// Children are evaluated before their parent. A ring that absorbs its
    /// in-order successor during a two-child removal is not re-evaluated.
    /// Returns the number of rings removed.
    #[instrument(level = "debug", skip(self))]
    pub fn purge_small_rings(&mut self, min_sites: usize) -> usize {
        let mut purged = 0;
        for (idx, slot) in self.postorder_slots() {
            let Some(ring) = self.get(idx) else {
                continue;
            };
            let site_count = ring.site_count();
            if site_count >= min_sites {
                continue;
            }
            debug!(ring = ring.name(), site_count, "purging ring");
            self.remove_node(idx, slot);
            purged += 1;
        }
        info!(purged, remaining = self.len(), "purge complete");
        purged
    }

    /// Removes every site whose name contains `flag_word`, across all rings.
    ///
    /// Rings left without sites stay in the network.
    ///
    /// # Panics
    /// Panics if the network is empty or `flag_word` is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_dead_links(&mut self, flag_word: &str) -> usize {
        assert!(!self.is_empty(), "cannot delete dead links from an empty network");
        assert!(!flag_word.is_empty(), "dead link flag must not be empty");

        let mut removed = 0;
        for ring in self.rings_mut() {
            let count = ring.remove_sites_matching(|site| site.contains(flag_word));
            if count > 0 {
                debug!(ring = ring.name(), count, "dead links removed");
            }
            removed += count;
        }
        removed
    }

    /// Total number of sites across every ring.
    ///
    /// # Panics
    /// Panics if the network is empty.
    pub fn total_surf_chain_length(&self) -> usize {
        assert!(!self.is_empty(), "cannot measure an empty network");
        self.iter().map(|(_, node)| node.ring().site_count()).sum()
    }

    /// Tops up under-populated rings with sites taken from a direct child.
    ///
    /// Returns the number of sites moved.
    #[instrument(level = "debug", skip(self))]
    pub fn scavenge_neighboring_rings(&mut self, min_sites: usize) -> usize {
        // Scavenging moves sites only, so the node order stays valid throughout.
        let order: Vec<Index> = self.iter_postorder().map(|(idx, _)| idx).collect();
        let mut total = 0;
        for idx in order {
            total += self.scavenge_into(idx, min_sites);
        }
        info!(total, "scavenge complete");
        total
    }

    fn scavenge_into(&mut self, idx: Index, min_sites: usize) -> usize {
        let Some(node) = self.get_node(idx) else {
            return 0;
        };
        let site_count = node.ring().site_count();
        if site_count >= min_sites {
            return 0;
        }

        let Some((donor, donor_count)) = self.pick_donor(node.left(), node.right(), min_sites)
        else {
            trace!(ring = node.ring().name(), "no child can donate");
            return 0;
        };

        let needed = min_sites - site_count;
        // The donor must keep at least `min_sites` once `needed` sites are gone.
        if donor_count - min_sites < needed {
            trace!(ring = node.ring().name(), donor_count, needed, "donor surplus too small");
            return 0;
        }

        let mut scavenged = 0;
        while scavenged < needed {
            let Some(donor_ring) = self.get_mut(donor) else {
                break;
            };
            if donor_ring.site_count() <= min_sites {
                break;
            }
            let Some(site) = donor_ring.take_smallest_site() else {
                break;
            };
            let Some(needy) = self.get_mut(idx) else {
                break;
            };
            trace!(ring = needy.name(), site = %site, "site scavenged");
            needy.add_site(site);
            scavenged += 1;
        }
        scavenged
    }

    /// Larger child wins, ties go left; a donor must hold more than `min_sites`.
    fn pick_donor(
        &self,
        left: Option<Index>,
        right: Option<Index>,
        min_sites: usize,
    ) -> Option<(Index, usize)> {
        let count = |child: Option<Index>| {
            child
                .and_then(|idx| self.get(idx))
                .map_or(0, Ring::site_count)
        };
        let left_count = count(left);
        let right_count = count(right);

        if left_count > min_sites && left_count >= right_count {
            left.map(|idx| (idx, left_count))
        } else if right_count > min_sites && right_count >= left_count {
            right.map(|idx| (idx, right_count))
        } else {
            None
        }
    }

    /// Releases every ring, children first, leaving an empty network.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_network(&mut self) {
        let order: Vec<Index> = self.iter_postorder().map(|(idx, _)| idx).collect();
        for idx in order {
            if let Some(mut ring) = self.free(idx) {
                ring.clear_sites();
                trace!(ring = ring.name(), "ring released");
            }
        }
        self.set_child(Slot::Root, None);
    }
}
