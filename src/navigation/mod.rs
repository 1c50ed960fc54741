// Page Navigation Module - Idle/Transitioning lock around the current page
//
// The statig machine holds the index math and the lock; the navigator adds
// the settle timer and change notification on top of it.

pub mod keys;
pub mod navigator;
pub mod state_machine;
pub mod types;

pub use keys::{dispatch, parse_key_sequence, Key, KeyParseError};
pub use navigator::PageNavigator;
pub use state_machine::PageMachine;
pub use types::{NavEvent, NavigationState, RequestOutcome, SETTLE_DELAY};
