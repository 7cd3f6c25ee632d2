//! Host-side editing session for the profile form.
//!
//! The UI host owns rendering and event wiring; this type owns the small
//! amount of state the pipeline needs between events: whether the form is
//! being edited, the last validation notification, and the metrics
//! collaborator the host is expected to supply.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::warn;

use profile_model::{FormValues, ProfilePatch, Result};
use profile_validate::validate_form_values;

use crate::submit::prepare_for_submit;

/// Receives product metric events emitted while the form is used.
pub trait MetricsSink: Send + Sync {
    fn track(&self, event: &str);
}

/// Collaborators the host supplies when constructing a session.
#[derive(Default)]
pub struct SessionConfig {
    pub metrics: Option<Arc<dyn MetricsSink>>,
}

/// Whether the form is currently in view or edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing,
}

/// One editing session over a patient's profile form.
pub struct FormSession {
    metrics: Option<Arc<dyn MetricsSink>>,
    state: EditState,
    notification: Option<String>,
}

impl FormSession {
    /// Builds a session, checking the configured collaborators once.
    ///
    /// A missing metrics sink is not fatal, but it is surfaced as a
    /// diagnostic here so a misconfigured host is visible at construction
    /// rather than silently dropping events.
    pub fn new(config: SessionConfig) -> Self {
        if config.metrics.is_none() {
            warn!("required collaborator `metrics` was not supplied; events will be dropped");
        }
        Self {
            metrics: config.metrics,
            state: EditState::Viewing,
            notification: None,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// The message from the last failed submit attempt, if any.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Switches between viewing and editing.
    pub fn toggle_edit(&mut self) {
        self.state = match self.state {
            EditState::Viewing => EditState::Editing,
            EditState::Editing => EditState::Viewing,
        };
        self.track(match self.state {
            EditState::Editing => "Clicked Edit Profile",
            EditState::Viewing => "Closed Profile Edit",
        });
    }

    /// Runs one submit attempt: validate, then prepare the patch.
    ///
    /// A validation failure is the soft channel: the message is stored as
    /// the session notification and `Ok(None)` is returned. A conversion
    /// failure in the preparer is the hard channel and propagates as an
    /// error; the caller must abort the submission.
    pub fn submit(&mut self, values: &FormValues, now: NaiveDate) -> Result<Option<ProfilePatch>> {
        if let Some(failure) = validate_form_values(values, now) {
            self.notification = Some(failure.message().to_string());
            return Ok(None);
        }
        self.notification = None;
        let patch = prepare_for_submit(values)?;
        self.track("Updated profile");
        Ok(Some(patch))
    }

    /// [`FormSession::submit`] against the current local date.
    pub fn submit_today(&mut self, values: &FormValues) -> Result<Option<ProfilePatch>> {
        self.submit(values, Local::now().date_naive())
    }

    fn track(&self, event: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.track(event);
        }
    }
}
