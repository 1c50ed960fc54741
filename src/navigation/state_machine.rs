use statig::prelude::*;

use super::types::{NavEvent, NavigationState, RequestOutcome};

/// Idle/Transitioning lock around the current page index.
///
/// The machine itself is timeless: whoever drives it is responsible for
/// delivering `NavEvent::Settle` once the settle delay has elapsed.
#[derive(Debug)]
pub struct PageMachine {
    current_page: u32,
    total_pages: u32,
    pending: Option<u32>,
    last_outcome: Option<RequestOutcome>,
}

impl PageMachine {
    pub fn new(total_pages: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages.max(1),
            pending: None,
            last_outcome: None,
        }
    }

    fn accept(&mut self, target: u32) -> Outcome<State> {
        self.pending = Some(target);
        self.last_outcome = Some(RequestOutcome::Accepted {
            from: self.current_page,
            to: target,
        });
        tracing::debug!(from = self.current_page, to = target, "Page transition accepted");
        Transition(State::transitioning())
    }

    fn reject(&mut self, outcome: RequestOutcome) -> Outcome<State> {
        self.last_outcome = Some(outcome);
        tracing::trace!(current_page = self.current_page, outcome = %outcome, "Page request dropped");
        Handled
    }
}

#[state_machine(initial = "State::idle()")]
impl PageMachine {
    #[state]
    fn idle(&mut self, event: &NavEvent) -> Outcome<State> {
        match event {
            NavEvent::Next => {
                if self.current_page >= self.total_pages {
                    return self.reject(RequestOutcome::AtBoundary);
                }
                self.accept(self.current_page + 1)
            }
            NavEvent::Previous => {
                if self.current_page <= 1 {
                    return self.reject(RequestOutcome::AtBoundary);
                }
                self.accept(self.current_page - 1)
            }
            NavEvent::GoTo { target } => {
                if *target == self.current_page {
                    return self.reject(RequestOutcome::SamePage);
                }
                if !self.snapshot().contains(*target) {
                    return self.reject(RequestOutcome::OutOfRange { target: *target });
                }
                self.accept(*target)
            }
            // A stray settle while idle has nothing to apply
            NavEvent::Settle => Handled,
        }
    }

    #[state]
    fn transitioning(&mut self, event: &NavEvent) -> Outcome<State> {
        match event {
            NavEvent::Settle => {
                if let Some(target) = self.pending.take() {
                    self.current_page = target;
                }
                self.last_outcome = None;
                tracing::debug!(current_page = self.current_page, "Page transition settled");
                Transition(State::idle())
            }
            _ => self.reject(RequestOutcome::Busy),
        }
    }
}

impl PageMachine {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn pending_target(&self) -> Option<u32> {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Outcome of the most recent request event, cleared on settle
    pub fn last_outcome(&self) -> Option<RequestOutcome> {
        self.last_outcome
    }

    pub fn snapshot(&self) -> NavigationState {
        NavigationState {
            current_page: self.current_page,
            total_pages: self.total_pages,
            is_animating: self.is_animating(),
        }
    }
}
