//! Per-session state: the screening gate and the two classification flows.
//!
//! The condition panel only runs after one successful initial screening in
//! the same session. A `Session` belongs to one CLI invocation or one GUI
//! window and is never shared between users.

use image::RgbImage;
use std::sync::Arc;

use crate::error::{DermaError, Result};
use crate::inference::ClassificationFlow;
use crate::models::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionGate {
    #[default]
    NotScreened,
    Screened,
}

impl SessionGate {
    pub fn is_open(self) -> bool {
        self == SessionGate::Screened
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    gate: SessionGate,
    screening: ClassificationFlow,
    condition: ClassificationFlow,
}

impl Session {
    pub fn new(screening: ClassificationFlow, condition: ClassificationFlow) -> Self {
        Self {
            gate: SessionGate::NotScreened,
            screening,
            condition,
        }
    }

    pub fn gate(&self) -> SessionGate {
        self.gate
    }

    pub fn screening_flow(&self) -> &ClassificationFlow {
        &self.screening
    }

    pub fn condition_flow(&self) -> &ClassificationFlow {
        &self.condition
    }

    /// Run initial screening on uploaded bytes
    pub fn screen_bytes(&mut self, bytes: &[u8]) -> Result<Outcome> {
        let result = self.screening.classify_bytes(bytes);
        self.record_screening(result)
    }

    /// Run initial screening on a decoded image
    pub fn screen_image(&mut self, image: RgbImage) -> Result<Outcome> {
        let result = self.screening.classify_image(image);
        self.record_screening(result)
    }

    /// Feed back a screening result computed elsewhere (e.g. on a worker
    /// thread). Any successful result opens the gate; failures leave it as is.
    pub fn record_screening(&mut self, result: Result<Outcome>) -> Result<Outcome> {
        if result.is_ok() && !self.gate.is_open() {
            log::info!("Initial screening completed, skin condition panel unlocked");
            self.gate = SessionGate::Screened;
        }
        result
    }

    /// Refuse unless initial screening has completed in this session
    pub fn ensure_screened(&self) -> Result<()> {
        if self.gate.is_open() {
            Ok(())
        } else {
            Err(DermaError::ScreeningRequired)
        }
    }

    /// Identify the skin condition in uploaded bytes
    pub fn identify_bytes(&self, bytes: &[u8]) -> Result<Outcome> {
        self.ensure_screened()?;
        self.condition.classify_bytes(bytes)
    }

    /// Identify the skin condition in a decoded image
    pub fn identify_image(&self, image: RgbImage) -> Result<Outcome> {
        self.ensure_screened()?;
        self.condition.classify_image(image)
    }
}

/// Run a flow on tokio's blocking pool so an async caller is never blocked
/// by model execution
pub async fn classify_in_background(
    flow: ClassificationFlow,
    bytes: Arc<Vec<u8>>,
) -> Result<Outcome> {
    tokio::task::spawn_blocking(move || flow.classify_bytes(&bytes))
        .await
        .map_err(|e| DermaError::ClassificationUnavailable(format!("inference task failed: {}", e)))?
}
