use anyhow::Result;
use serde::Serialize;
use tracing::Instrument;

use super::{Command, Session};
use crate::navigation::{dispatch, parse_key_sequence, Key, NavigationState, RequestOutcome};
use crate::presentation::NavigationView;
use crate::telemetry::{create_session_span, generate_session_id};

pub struct WalkCommand {
    pub keys: String,
    pub wait: bool,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkStep {
    pub key: String,
    pub outcome: RequestOutcome,
    pub state: NavigationState,
}

impl WalkCommand {
    pub fn new(keys: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            wait: true,
            json: false,
        }
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Press every key in order and record what the navigator did with it
    pub async fn run(&self, session: &Session) -> Result<Vec<WalkStep>> {
        let keys: Vec<Key> = parse_key_sequence(&self.keys)?;
        let contact_page = session.catalog.contact_page();
        let mut steps = Vec::with_capacity(keys.len());

        for key in keys {
            let outcome = dispatch(&session.navigator, key, contact_page);
            let state = if self.wait && outcome.is_accepted() {
                session.navigator.settled().await
            } else {
                session.navigator.state()
            };
            steps.push(WalkStep {
                key: format!("{key:?}"),
                outcome,
                state,
            });
        }

        if !self.wait {
            session.navigator.settled().await;
        }
        Ok(steps)
    }

    fn print_step(&self, session: &Session, step: &WalkStep) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(step)?);
        } else {
            let view = NavigationView::from_state(&step.state, &session.catalog);
            println!(
                "{:<12} {:<36} {}",
                step.key,
                step.outcome.to_string(),
                view.render_line(&session.config.presentation)
            );
        }
        Ok(())
    }
}

impl Command for WalkCommand {
    async fn execute(&self) -> Result<()> {
        let session = Session::from_global_config()?;
        let session_id = generate_session_id();
        let span = create_session_span("walk", &session_id);

        let steps = self.run(&session).instrument(span).await?;
        for step in &steps {
            self.print_step(&session, step)?;
        }

        let final_state = session.navigator.state();
        if !self.json {
            let view = NavigationView::from_state(&final_state, &session.catalog);
            println!();
            println!("📖 Finished on page {}: {}", view.current_page, view.title);
        }
        session.navigator.log_stats();
        Ok(())
    }
}
