use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn, Instrument};

use super::{Command, Session};
use crate::navigation::{dispatch, Key, KeyParseError, RequestOutcome};
use crate::presentation::NavigationView;
use crate::telemetry::{create_session_span, generate_session_id};

pub struct BrowseCommand;

#[derive(Debug, PartialEq, Eq)]
pub enum LineAction {
    Pressed(Key, RequestOutcome),
    Invalid(KeyParseError),
    Skip,
    Quit,
}

impl BrowseCommand {
    pub fn new() -> Self {
        Self
    }

    /// Interpret one line of input against the session's navigator
    pub fn handle_line(session: &Session, line: &str) -> LineAction {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineAction::Skip;
        }
        if matches!(trimmed, "q" | "quit" | "exit") {
            return LineAction::Quit;
        }
        match trimmed.parse::<Key>() {
            Ok(key) => {
                let outcome = dispatch(&session.navigator, key, session.catalog.contact_page());
                LineAction::Pressed(key, outcome)
            }
            Err(e) => LineAction::Invalid(e),
        }
    }

    /// Read keys until EOF or quit; returns the number of accepted page turns
    pub async fn read_loop<R>(session: &Session, reader: R) -> Result<u64>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut accepted = 0;
        while let Some(line) = lines.next_line().await? {
            match Self::handle_line(session, &line) {
                LineAction::Pressed(key, outcome) => {
                    if outcome.is_accepted() {
                        accepted += 1;
                    } else {
                        tracing::debug!(?key, %outcome, "Key press had no effect");
                    }
                }
                LineAction::Invalid(e) => eprintln!("⚠️  {e}"),
                LineAction::Skip => {}
                LineAction::Quit => break,
            }
        }
        session.navigator.settled().await;
        Ok(accepted)
    }
}

impl Default for BrowseCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for BrowseCommand {
    async fn execute(&self) -> Result<()> {
        let session = Session::from_global_config()?;
        let session_id = generate_session_id();
        let span = create_session_span("browse", &session_id);

        println!("📖 Portfolio Book. Keys: left, right, home, end, contact, 1-7, q to quit");
        let initial = NavigationView::from_state(&session.navigator.state(), &session.catalog);
        println!("{}", initial.render_line(&session.config.presentation));

        // Redraw on every state change
        let mut updates = session.navigator.subscribe();
        let catalog = session.catalog;
        let presentation = session.config.presentation.clone();
        let renderer = tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let state = *updates.borrow_and_update();
                let view = NavigationView::from_state(&state, &catalog);
                println!("{}", view.render_line(&presentation));
            }
        });

        let stdin = BufReader::new(tokio::io::stdin());
        let result = tokio::select! {
            result = Self::read_loop(&session, stdin).instrument(span) => result,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, waiting for the current page turn to finish");
                session.navigator.settled().await;
                Ok(0)
            }
        };

        renderer.abort();
        let accepted = result?;

        let last = NavigationView::from_state(&session.navigator.state(), &session.catalog);
        println!("📕 Closed on page {}: {}", last.current_page, last.title);
        info!(accepted, "Browse session ended");
        session.navigator.log_stats();
        Ok(())
    }
}
