//! Presentation Module
//!
//! A read-only view of the navigator for whatever draws the book. Nothing
//! here holds state; every view is derived from a [`NavigationState`].

use serde::Serialize;
use std::fmt::Write as _;

use crate::book::PageCatalog;
use crate::config::PresentationConfig;
use crate::navigation::NavigationState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub title: &'static str,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub is_animating: bool,
    /// One entry per page, true for the page being shown
    pub indicators: Vec<bool>,
}

impl NavigationView {
    pub fn from_state(state: &NavigationState, catalog: &PageCatalog) -> Self {
        let title = catalog
            .get(state.current_page)
            .map(|page| page.title)
            .unwrap_or("");
        Self {
            current_page: state.current_page,
            total_pages: state.total_pages,
            title,
            prev_disabled: state.is_first() || state.is_animating,
            next_disabled: state.is_last() || state.is_animating,
            is_animating: state.is_animating,
            indicators: (1..=state.total_pages)
                .map(|page| page == state.current_page)
                .collect(),
        }
    }

    /// Single terminal line, e.g. `‹ [3/7] Education ○○●○○○○ ›`
    pub fn render_line(&self, options: &PresentationConfig) -> String {
        let mut line = String::new();
        line.push_str(if self.prev_disabled { "  " } else { "‹ " });
        let _ = write!(line, "[{}/{}]", self.current_page, self.total_pages);
        if options.show_title {
            let _ = write!(line, " {}", self.title);
        }
        if options.show_indicator {
            line.push(' ');
            for active in &self.indicators {
                line.push(if *active { '●' } else { '○' });
            }
        }
        if self.is_animating {
            line.push_str(" …");
        }
        line.push_str(if self.next_disabled { "  " } else { " ›" });
        line
    }
}
