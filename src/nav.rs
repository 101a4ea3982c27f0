//! Navigation: link resolution, active-link tracking, and the mobile menu.
//!
//! The same content `nav_links` serve both layouts:
//!
//! - **Multi-page**: links point at the section files as written. The link
//!   whose destination equals the current file is marked active when the
//!   page is generated; scrolling never changes it.
//! - **Single-page**: links to known section files are rewritten to in-page
//!   anchors (`career.html` → `#career`). The active link follows the scroll
//!   position via [`ScrollSpy`].

use crate::config::NavigationMode;
use crate::content::NavLink;
use crate::document::Section;

/// A link ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// The page file a path refers to: its last segment, `index.html` for a
/// bare directory.
pub fn current_page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(name) => name,
    }
}

pub fn is_current_page(href: &str, path: &str) -> bool {
    href == current_page_name(path)
}

/// Resolve content links for a layout.
///
/// `current_path` is the page being generated; it only matters in
/// multi-page mode.
pub fn nav_entries(links: &[NavLink], mode: NavigationMode, current_path: &str) -> Vec<NavEntry> {
    links
        .iter()
        .map(|link| match mode {
            NavigationMode::MultiPage => NavEntry {
                name: link.name.clone(),
                href: link.href.clone(),
                active: is_current_page(&link.href, current_path),
            },
            NavigationMode::SinglePage => NavEntry {
                name: link.name.clone(),
                href: anchor_for(&link.href),
                active: false,
            },
        })
        .collect()
}

/// Map a section file to its anchor; anything else passes through.
fn anchor_for(href: &str) -> String {
    match Section::from_page_file(href) {
        Some(section) => format!("#{}", section.id()),
        None => href.to_string(),
    }
}

/// Vertical extent of a section with an id, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section the scroll position is in.
///
/// A section counts from `lookahead` pixels above its top. When spans
/// overlap, the later section wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let start = s.top - lookahead;
            scroll_y >= start && scroll_y < start + s.height
        })
        .map(|s| s.id.as_str())
}

/// Single-page scroll tracking: active link and the navbar's `scrolled` flag.
pub struct ScrollSpy {
    entries: Vec<NavEntry>,
    lookahead: f64,
    scrolled_offset: f64,
    scrolled: bool,
}

impl ScrollSpy {
    pub fn new(entries: Vec<NavEntry>, lookahead: f64, scrolled_offset: f64) -> Self {
        Self {
            entries,
            lookahead,
            scrolled_offset,
            scrolled: false,
        }
    }

    /// Handle a scroll event. Clears every link, then activates the one
    /// pointing at the current section. Returns the current section id.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionSpan]) -> Option<String> {
        self.scrolled = scroll_y > self.scrolled_offset;
        let current = active_section(sections, scroll_y, self.lookahead).map(str::to_string);
        let target = current.as_deref().map(|id| format!("#{id}"));
        for entry in &mut self.entries {
            entry.active = target.as_deref() == Some(entry.href.as_str());
        }
        current
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn active(&self) -> Vec<&NavEntry> {
        self.entries.iter().filter(|e| e.active).collect()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Open/closed state of the collapsible mobile menu.
///
/// The state is reflected as an `active` class on both the toggle button and
/// the link list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any nav link click closes the menu.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    fn spans() -> Vec<SectionSpan> {
        [("hero", 0.0, 800.0), ("education", 800.0, 600.0), ("career", 1400.0, 900.0)]
            .into_iter()
            .map(|(id, top, height)| SectionSpan {
                id: id.to_string(),
                top,
                height,
            })
            .collect()
    }

    #[test]
    fn current_page_name_cases() {
        assert_eq!(current_page_name("/site/career.html"), "career.html");
        assert_eq!(current_page_name("career.html"), "career.html");
        assert_eq!(current_page_name("/site/"), "index.html");
        assert_eq!(current_page_name(""), "index.html");
    }

    #[test]
    fn multi_page_marks_current_file() {
        let links = Content::stock().nav_links;
        let entries = nav_entries(&links, NavigationMode::MultiPage, "/portfolio/skills.html");
        let active: Vec<&str> = entries.iter().filter(|e| e.active).map(|e| e.name.as_str()).collect();
        assert_eq!(active, vec!["Skills"]);
        assert_eq!(entries[3].href, "skills.html");
    }

    #[test]
    fn multi_page_root_path_is_index() {
        let links = Content::stock().nav_links;
        let entries = nav_entries(&links, NavigationMode::MultiPage, "/");
        assert!(entries[0].active);
        assert_eq!(entries.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn single_page_rewrites_to_anchors() {
        let mut links = Content::stock().nav_links;
        links.push(NavLink {
            name: "Blog".into(),
            href: "https://blog.example.com".into(),
        });
        let entries = nav_entries(&links, NavigationMode::SinglePage, "index.html");
        let hrefs: Vec<&str> = entries.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "#hero",
                "#education",
                "#career",
                "#skills",
                "#projects",
                "#contact",
                "https://blog.example.com"
            ]
        );
        assert!(entries.iter().all(|e| !e.active));
    }

    #[test]
    fn active_section_uses_lookahead() {
        let s = spans();
        assert_eq!(active_section(&s, 0.0, 100.0), Some("hero"));
        assert_eq!(active_section(&s, 699.0, 100.0), Some("hero"));
        // education starts counting at 800 - 100.
        assert_eq!(active_section(&s, 700.0, 100.0), Some("education"));
        assert_eq!(active_section(&s, 1300.0, 100.0), Some("career"));
        assert_eq!(active_section(&s, 2200.0, 100.0), None);
    }

    #[test]
    fn active_section_before_first_span() {
        let s = vec![SectionSpan {
            id: "late".into(),
            top: 500.0,
            height: 100.0,
        }];
        assert_eq!(active_section(&s, 0.0, 100.0), None);
    }

    #[test]
    fn scroll_spy_marks_exactly_one() {
        let entries = nav_entries(&Content::stock().nav_links, NavigationMode::SinglePage, "");
        let mut spy = ScrollSpy::new(entries, 100.0, 50.0);
        assert_eq!(spy.on_scroll(900.0, &spans()).as_deref(), Some("education"));
        let active = spy.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "#education");

        spy.on_scroll(1500.0, &spans());
        let active = spy.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "#career");
    }

    #[test]
    fn scroll_spy_clears_when_no_section() {
        let entries = nav_entries(&Content::stock().nav_links, NavigationMode::SinglePage, "");
        let mut spy = ScrollSpy::new(entries, 100.0, 50.0);
        spy.on_scroll(100.0, &spans());
        assert_eq!(spy.active().len(), 1);
        assert_eq!(spy.on_scroll(5000.0, &spans()), None);
        assert!(spy.active().is_empty());
    }

    #[test]
    fn scroll_spy_scrolled_flag() {
        let mut spy = ScrollSpy::new(vec![], 100.0, 50.0);
        spy.on_scroll(50.0, &[]);
        assert!(!spy.is_scrolled());
        spy.on_scroll(51.0, &[]);
        assert!(spy.is_scrolled());
        spy.on_scroll(0.0, &[]);
        assert!(!spy.is_scrolled());
    }

    #[test]
    fn mobile_menu_toggle_and_close() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.link_clicked();
        assert!(!menu.is_open());
        menu.link_clicked();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }
}
