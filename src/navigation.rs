pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a, .mobile-nav-link";
pub const TRACKED_SECTION_SELECTOR: &str = "section[id]";
pub const ACTIVE_CLASS: &str = "active";

/// Section id an in-page anchor points at. A bare `#` points nowhere.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section containing `probe`. Later sections win when extents overlap.
pub fn section_at(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

#[derive(Debug, Default)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    #[cfg(test)]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the newly active id, or `None` when nothing changed. With no
    /// section under the probe the previous highlight is kept.
    pub fn update(&mut self, sections: &[SectionBounds], probe: f64) -> Option<&str> {
        let found = section_at(sections, probe)?;
        if self.current.as_deref() == Some(found) {
            return None;
        }

        self.current = Some(found.to_string());
        self.current.as_deref()
    }
}

pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    anchor_target_id(href) == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        [("home", 0.0, 600.0), ("about", 600.0, 800.0), ("projects", 1400.0, 900.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn anchors_resolve_only_in_page_ids() {
        assert_eq!(anchor_target_id("#about"), Some("about"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("/resume.pdf"), None);
        assert!(link_targets_section("#projects", "projects"));
        assert!(!link_targets_section("#projects", "about"));
    }

    #[test]
    fn destination_accounts_for_header() {
        assert_eq!(scroll_destination(1400.0, 72.0), 1328.0);
    }

    #[test]
    fn section_extent_is_half_open() {
        let sections = layout();

        assert_eq!(section_at(&sections, 0.0), Some("home"));
        assert_eq!(section_at(&sections, 599.9), Some("home"));
        assert_eq!(section_at(&sections, 600.0), Some("about"));
        assert_eq!(section_at(&sections, 2300.0), None);
    }

    #[test]
    fn active_section_reports_changes_only() {
        let sections = layout();
        let mut active = ActiveSection::default();

        assert_eq!(active.update(&sections, 100.0), Some("home"));
        assert_eq!(active.update(&sections, 300.0), None);
        assert_eq!(active.update(&sections, 700.0), Some("about"));
        assert_eq!(active.update(&sections, 5000.0), None);
        assert_eq!(active.current(), Some("about"));
    }
}
