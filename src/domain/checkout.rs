//! License purchase checkout flow.
//!
//! A per-invocation state machine: it starts in `Selecting` with a snapshot
//! of the cart, validates contact fields synchronously, submits through a
//! [`PurchaseGateway`], and ends in `Success` or a retry-eligible `Error`.
//! The flow never retries on its own and owns no cart state; on acknowledged
//! success it signals the caller to clear the cart and navigate away.

use serde::Serialize;
use validator::ValidateEmail;

use crate::domain::catalog::Track;
use crate::domain::gateways::purchase_gateway::PurchaseGateway;

/// Ephemeral value object built at submission time.
///
/// Holds a copy of the cart's tracks, not a live reference; it exists only
/// for the duration of the notifier call and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseSubmission {
    pub name: String,
    pub email: String,
    pub beats: Vec<Track>,
}

/// Per-field validation messages surfaced while remaining in `Selecting`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// States of one checkout invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// Collecting buyer name and email over the cart snapshot.
    Selecting,
    /// Submission in flight. No timeout-triggered transition exists; a hung
    /// call leaves the flow here until the caller abandons it.
    Submitting,
    /// Terminal: the notifier accepted the purchase.
    Success,
    /// The notifier failed or was unreachable; the user may resubmit.
    Error(String),
}

/// What the caller should do after dismissing the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Purchase confirmed: clear the cart and navigate away.
    ClearCartAndLeave,
    /// Nothing was purchased; keep the cart as-is.
    Stay,
}

/// One checkout invocation over a cart snapshot.
pub struct CheckoutFlow {
    beats: Vec<Track>,
    name: String,
    email: String,
    state: CheckoutState,
    field_errors: FieldErrors,
}

impl CheckoutFlow {
    /// Starts a flow in `Selecting` over a snapshot of the cart's tracks.
    pub fn new(beats: Vec<Track>) -> Self {
        Self {
            beats,
            name: String::new(),
            email: String::new(),
            state: CheckoutState::Selecting,
            field_errors: FieldErrors::default(),
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// The snapshot being purchased, for display.
    pub fn beats(&self) -> &[Track] {
        &self.beats
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Synchronous field validation: name required, email required with a
    /// basic `local@domain` shape.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !self.email.validate_email() {
            errors.email = Some("Enter a valid email address".to_string());
        }
        errors
    }

    /// Submits the purchase through the gateway.
    ///
    /// Validation failures never reach the gateway: the flow stays in
    /// `Selecting` with per-field messages. A flow already in `Submitting`
    /// or `Success` ignores further submissions. From `Error`, submitting
    /// again re-enters `Submitting`.
    pub async fn submit(&mut self, gateway: &dyn PurchaseGateway) -> &CheckoutState {
        match self.state {
            CheckoutState::Selecting | CheckoutState::Error(_) => {}
            CheckoutState::Submitting | CheckoutState::Success => return &self.state,
        }

        self.field_errors = self.validate();
        if !self.field_errors.is_empty() {
            self.state = CheckoutState::Selecting;
            return &self.state;
        }

        self.state = CheckoutState::Submitting;
        let submission = PurchaseSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            beats: self.beats.clone(),
        };

        self.state = match gateway.submit(&submission).await {
            Ok(()) => CheckoutState::Success,
            Err(e) => CheckoutState::Error(e.to_string()),
        };
        &self.state
    }

    /// Dismisses the flow and tells the caller what to do with the cart.
    pub fn acknowledge(&self) -> CheckoutOutcome {
        match self.state {
            CheckoutState::Success => CheckoutOutcome::ClearCartAndLeave,
            _ => CheckoutOutcome::Stay,
        }
    }
}
