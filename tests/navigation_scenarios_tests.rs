//! Navigation scenario tests
//!
//! These run on a paused tokio clock, so the settle delay elapses instantly
//! and deterministically whenever every task is waiting on a timer.

use portfolio_book::navigation::{
    dispatch, Key, NavigationState, PageNavigator, RequestOutcome, SETTLE_DELAY,
};
use portfolio_book::TOTAL_PAGES;
use tokio::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle(navigator: &PageNavigator) -> NavigationState {
        let state = navigator.settled().await;
        assert!(!state.is_animating, "settled state must be idle");
        state
    }

    #[tokio::test(start_paused = true)]
    async fn test_forward_walk_reaches_last_page() {
        let navigator = PageNavigator::new(TOTAL_PAGES);

        for expected in 2..=TOTAL_PAGES {
            assert!(navigator.next().is_accepted());
            assert_eq!(settle(&navigator).await.current_page, expected);
        }

        assert_eq!(navigator.current_page(), 7);
        assert_eq!(navigator.next(), RequestOutcome::AtBoundary);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.current_page(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_direct_jump() {
        let navigator = PageNavigator::new(TOTAL_PAGES);

        assert_eq!(
            navigator.go_to(5),
            RequestOutcome::Accepted { from: 1, to: 5 }
        );
        assert_eq!(settle(&navigator).await.current_page, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mid_flight_request_is_dropped() {
        let navigator = PageNavigator::new(TOTAL_PAGES);
        navigator.go_to(2);
        settle(&navigator).await;

        assert!(navigator.next().is_accepted());
        assert_eq!(navigator.go_to(7), RequestOutcome::Busy);

        assert_eq!(settle(&navigator).await.current_page, 3);

        // Nothing was queued behind the dropped request
        tokio::time::sleep(SETTLE_DELAY * 4).await;
        assert_eq!(navigator.current_page(), 3);
        assert!(!navigator.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_go_to_never_moves() {
        let navigator = PageNavigator::new(TOTAL_PAGES);

        assert_eq!(navigator.go_to(0), RequestOutcome::OutOfRange { target: 0 });
        assert_eq!(
            navigator.go_to(TOTAL_PAGES + 1),
            RequestOutcome::OutOfRange { target: TOTAL_PAGES + 1 }
        );
        assert_eq!(navigator.state(), NavigationState::new(TOTAL_PAGES));
    }

    #[tokio::test(start_paused = true)]
    async fn test_self_target_never_animates() {
        let navigator = PageNavigator::new(TOTAL_PAGES);
        navigator.go_to(4);
        settle(&navigator).await;

        assert_eq!(navigator.go_to(4), RequestOutcome::SamePage);
        assert!(!navigator.is_animating());
        assert_eq!(navigator.current_page(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_previous_saturates_at_first_page() {
        let navigator = PageNavigator::new(TOTAL_PAGES);

        assert_eq!(navigator.previous(), RequestOutcome::AtBoundary);
        assert_eq!(navigator.state(), NavigationState::new(TOTAL_PAGES));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_double_next_is_debounced() {
        let navigator = PageNavigator::new(TOTAL_PAGES);

        navigator.next();
        navigator.next();
        tokio::time::sleep(SETTLE_DELAY + Duration::from_millis(1)).await;

        assert_eq!(navigator.current_page(), 2);
        let stats = navigator.stats();
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.dropped_busy, 1);
    }

    // Settles land on a worker thread while requests keep arriving here; what
    // the navigator reports must always agree with what the machine accepts.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_observed_state_tracks_machine_across_threads() {
        let navigator = PageNavigator::new(TOTAL_PAGES);
        let deadline = tokio::time::Instant::now() + SETTLE_DELAY * 5;
        let mut forward = true;
        let mut in_flight: Option<u32> = None;

        while tokio::time::Instant::now() < deadline {
            let observed = navigator.state();
            if let Some(to) = in_flight {
                if !observed.is_animating {
                    assert_eq!(
                        observed.current_page, to,
                        "navigator reported idle before its transition settled"
                    );
                    in_flight = None;
                }
            }

            let outcome = if forward {
                navigator.next()
            } else {
                navigator.previous()
            };

            match outcome {
                RequestOutcome::Busy => assert!(
                    observed.is_animating,
                    "navigator reported idle while the machine was transitioning"
                ),
                RequestOutcome::Accepted { to, .. } => {
                    assert!(navigator.is_animating());
                    in_flight = Some(to);
                }
                RequestOutcome::AtBoundary => forward = !forward,
                other => panic!("unexpected outcome {other:?}"),
            }

            tokio::task::yield_now().await;
        }

        settle(&navigator).await;
        let stats = navigator.stats();
        assert!(stats.accepted >= 2, "expected several page turns, got {}", stats.accepted);
        assert_eq!(stats.accepted, stats.settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounds_hold_for_mixed_key_sequences() {
        let navigator = PageNavigator::new(TOTAL_PAGES);
        let keys = [
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::End,
            Key::Home,
            Key::Contact,
            Key::Digit(0),
            Key::Digit(3),
            Key::Digit(9),
        ];

        // Small LCG so the sequence is long but reproducible
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let key = keys[(seed >> 16) as usize % keys.len()];
            let wait = (seed >> 8) % 3 == 0;

            dispatch(&navigator, key, TOTAL_PAGES);
            if wait {
                settle(&navigator).await;
            }

            let state = navigator.state();
            assert!(
                (1..=TOTAL_PAGES).contains(&state.current_page),
                "page {} escaped the book",
                state.current_page
            );
        }

        let state = settle(&navigator).await;
        assert!((1..=TOTAL_PAGES).contains(&state.current_page));
        let stats = navigator.stats();
        assert_eq!(stats.accepted, stats.settled);
    }
}
