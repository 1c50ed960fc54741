// Navigation types shared by the state machine, the navigator and its consumers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Time between accepting a request and the visible page change
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Snapshot of the navigator as seen by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub is_animating: bool,
}

impl NavigationState {
    pub fn new(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages,
            is_animating: false,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page == self.total_pages
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavEvent {
    Next,
    Previous,
    GoTo { target: u32 },
    Settle,
}

/// How the navigator classified a request.
///
/// Everything other than `Accepted` is a silent drop: no state change and
/// nothing surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestOutcome {
    Accepted { from: u32, to: u32 },
    Busy,
    OutOfRange { target: u32 },
    SamePage,
    AtBoundary,
}

impl RequestOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RequestOutcome::Accepted { .. })
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Accepted { from, to } => write!(f, "accepted {from} -> {to}"),
            RequestOutcome::Busy => write!(f, "dropped: transition in flight"),
            RequestOutcome::OutOfRange { target } => write!(f, "dropped: page {target} out of range"),
            RequestOutcome::SamePage => write!(f, "dropped: already on page"),
            RequestOutcome::AtBoundary => write!(f, "dropped: at edge of book"),
        }
    }
}
