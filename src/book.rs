//! Page Catalog Module
//!
//! The fixed, ordered set of pages that make up the portfolio book.
//! Page ids are 1-based and contiguous; the navigator only ever
//! holds an id that resolves in this catalog.

use serde::Serialize;

/// Number of pages in the book
pub const TOTAL_PAGES: u32 = 7;

static PAGES: [Page; TOTAL_PAGES as usize] = [
    Page { id: 1, title: "Profile" },
    Page { id: 2, title: "Experience" },
    Page { id: 3, title: "Education" },
    Page { id: 4, title: "Skills" },
    Page { id: 5, title: "Projects" },
    Page { id: 6, title: "Services" },
    Page { id: 7, title: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: u32,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PageCatalog {
    pages: &'static [Page],
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCatalog {
    pub fn new() -> Self {
        Self { pages: &PAGES }
    }

    pub fn len(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &'static [Page] {
        self.pages
    }

    /// Look up a page by its 1-based id
    pub fn get(&self, id: u32) -> Option<&'static Page> {
        if id == 0 {
            return None;
        }
        self.pages.get((id - 1) as usize)
    }

    /// Case-insensitive title lookup
    pub fn find_by_title(&self, title: &str) -> Option<&'static Page> {
        let wanted = title.trim();
        self.pages
            .iter()
            .find(|page| page.title.eq_ignore_ascii_case(wanted))
    }

    /// Target of the "contact me" shortcut
    pub fn contact_page(&self) -> u32 {
        self.find_by_title("Contact")
            .map(|page| page.id)
            .unwrap_or_else(|| self.len())
    }
}
