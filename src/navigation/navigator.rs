//! PageNavigator
//!
//! Drives a [`PageMachine`] in real time: every accepted request spawns a
//! single settle timer, and the page index only moves when that timer fires.
//! Consumers observe the state through a `watch` channel and never mutate it.

use statig::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::state_machine::PageMachine;
use super::types::{NavEvent, NavigationState, RequestOutcome, SETTLE_DELAY};
use crate::observability::{NavigationMetrics, NavigationStats, TransitionTimer};

struct Shared {
    machine: Mutex<StateMachine<PageMachine>>,
    updates: watch::Sender<NavigationState>,
    metrics: NavigationMetrics,
}

impl Shared {
    fn machine(&self) -> MutexGuard<'_, StateMachine<PageMachine>> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply the settle and publish it under the machine lock, so a request
    /// accepted right after can never be overwritten by this older snapshot
    fn settle(&self, timer: TransitionTimer) {
        let mut machine = self.machine();
        machine.handle(&NavEvent::Settle);
        let state = machine.inner().snapshot();
        self.updates.send_replace(state);
        drop(machine);

        self.metrics.record_settle();
        timer.finish();
        info!(current_page = state.current_page, "Page changed");
    }
}

/// Owner of the navigation state for one presentation session.
///
/// Must be used from within a tokio runtime; accepted requests schedule their
/// settle on it.
pub struct PageNavigator {
    shared: Arc<Shared>,
    settle_task: Mutex<Option<JoinHandle<()>>>,
}

impl PageNavigator {
    pub fn new(total_pages: u32) -> Self {
        let machine = PageMachine::new(total_pages).state_machine();
        let (updates, _) = watch::channel(machine.inner().snapshot());
        Self {
            shared: Arc::new(Shared {
                machine: Mutex::new(machine),
                updates,
                metrics: NavigationMetrics::new(),
            }),
            settle_task: Mutex::new(None),
        }
    }

    pub fn next(&self) -> RequestOutcome {
        self.request(NavEvent::Next)
    }

    pub fn previous(&self) -> RequestOutcome {
        self.request(NavEvent::Previous)
    }

    pub fn go_to(&self, target: u32) -> RequestOutcome {
        self.request(NavEvent::GoTo { target })
    }

    fn request(&self, event: NavEvent) -> RequestOutcome {
        let mut machine = self.shared.machine();
        machine.handle(&event);
        let outcome = machine
            .inner()
            .last_outcome()
            .unwrap_or(RequestOutcome::Busy);

        if let RequestOutcome::Accepted { from, to } = outcome {
            // Publish and arm the timer before another request or a settle can run
            self.shared.updates.send_replace(machine.inner().snapshot());
            self.schedule_settle(TransitionTimer::start(from, to));
            drop(machine);
            debug!(?event, from, to, "Scheduled page settle");
        } else {
            drop(machine);
            debug!(?event, %outcome, "Navigation request ignored");
        }
        self.shared.metrics.record_outcome(&outcome);
        outcome
    }

    /// Called with the machine lock held, which keeps a single timer outstanding
    fn schedule_settle(&self, timer: TransitionTimer) {
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            shared.settle(timer);
        });
        let mut slot = self.settle_task.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(handle);
    }

    pub fn state(&self) -> NavigationState {
        *self.shared.updates.borrow()
    }

    pub fn current_page(&self) -> u32 {
        self.state().current_page
    }

    pub fn is_animating(&self) -> bool {
        self.state().is_animating
    }

    pub fn total_pages(&self) -> u32 {
        self.state().total_pages
    }

    /// Receiver notified when a transition starts and when it settles
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.shared.updates.subscribe()
    }

    /// Wait until no transition is in flight
    pub async fn settled(&self) -> NavigationState {
        let mut updates = self.subscribe();
        let settled = match updates.wait_for(|state| !state.is_animating).await {
            Ok(state) => *state,
            // The sender lives as long as `self`, so this only happens on teardown
            Err(_) => self.state(),
        };
        settled
    }

    pub fn stats(&self) -> NavigationStats {
        self.shared.metrics.get_stats()
    }

    pub fn log_stats(&self) {
        self.shared.metrics.log_stats();
    }
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new(crate::book::TOTAL_PAGES)
    }
}

impl Drop for PageNavigator {
    fn drop(&mut self) {
        let slot = self.settle_task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
