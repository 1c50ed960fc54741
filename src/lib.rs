// Portfolio Book Library - a résumé presented as a paginated book
// This exposes the navigation core and the pieces the CLI is built from

pub mod book;
pub mod cli;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod presentation;
pub mod telemetry;

// Re-export key types for easy access
pub use crate::book::{Page, PageCatalog, TOTAL_PAGES};
pub use crate::config::{config, PortfolioBookConfig};
pub use crate::navigation::{Key, NavigationState, PageMachine, PageNavigator, RequestOutcome, SETTLE_DELAY};
pub use crate::observability::{NavigationMetrics, NavigationStats};
pub use crate::presentation::NavigationView;
pub use crate::telemetry::{create_session_span, generate_session_id, init_telemetry};
