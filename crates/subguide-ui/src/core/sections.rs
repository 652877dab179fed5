//! Page sections and scroll-spy bookkeeping.

use std::collections::BTreeSet;

/// A navigable page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    /// Element id of the section.
    pub id: &'static str,
    /// Translation key for the nav button.
    pub label_key: &'static str,
}

/// Observer root margin: a section is current while it crosses the line
/// 40% of the way down the viewport.
pub const SPY_ROOT_MARGIN: &str = "-40% 0px -60% 0px";

/// Sections in document order.
pub const SECTIONS: [Section; 3] = [
    Section {
        id: "home",
        label_key: "nav.home",
    },
    Section {
        id: "clients",
        label_key: "nav.clients",
    },
    Section {
        id: "feeds",
        label_key: "nav.feeds",
    },
];

/// Tracks which sections intersect the viewport band.
///
/// The active section is the topmost intersecting one; when none
/// intersect, the last active section is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    visible: BTreeSet<usize>,
    active: usize,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self {
            visible: BTreeSet::new(),
            active: 0,
        }
    }
}

impl SectionTracker {
    /// Record an intersection change. Returns `true` when the active section changed.
    ///
    /// Ids outside [`SECTIONS`] are ignored.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        let Some(index) = SECTIONS.iter().position(|section| section.id == id) else {
            return false;
        };
        if intersecting {
            self.visible.insert(index);
        } else {
            self.visible.remove(&index);
        }
        let next = self.visible.first().copied().unwrap_or(self.active);
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Currently highlighted section.
    #[must_use]
    pub fn active(&self) -> Section {
        SECTIONS[self.active.min(SECTIONS.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_band_is_a_line_at_forty_percent() {
        let insets: Vec<u32> = SPY_ROOT_MARGIN
            .split_whitespace()
            .filter_map(|part| part.strip_prefix('-')?.strip_suffix('%')?.parse().ok())
            .collect();
        assert_eq!(insets, vec![40, 60]);
        assert_eq!(insets.iter().sum::<u32>(), 100);
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(SectionTracker::default().active().id, "home");
    }

    #[test]
    fn topmost_visible_section_wins() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.observe("feeds", true));
        assert_eq!(tracker.active().id, "feeds");
        assert!(tracker.observe("clients", true));
        assert_eq!(tracker.active().id, "clients");
        assert!(tracker.observe("clients", false));
        assert_eq!(tracker.active().id, "feeds");
    }

    #[test]
    fn last_active_is_kept_between_sections() {
        let mut tracker = SectionTracker::default();
        tracker.observe("clients", true);
        assert!(!tracker.observe("clients", false));
        assert_eq!(tracker.active().id, "clients");
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.observe("footer", true));
        assert_eq!(tracker, SectionTracker::default());
    }
}
