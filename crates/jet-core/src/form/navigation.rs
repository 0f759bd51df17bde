//! Form navigation state machine.
//!
//! Defines a pure transition function for moving between form steps. Side
//! effects are returned as [`NavigationAction`]s for the caller to execute.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("a form needs at least one step")]
    NoSteps,
    #[error("step {step} is outside a {total_steps}-step form")]
    StepOutOfRange { step: u32, total_steps: u32 },
}

/// Current position in a multi-step form.
///
/// `current_step` stays within `1..=total_steps` except for the success
/// pseudo-step `total_steps + 1`, entered only through
/// [`NavigationEvent::Submitted`].
///
/// Deserialized states are checked against the same bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavigationState")]
pub struct NavigationState {
    current_step: u32,
    total_steps: u32,
}

#[derive(Deserialize)]
struct RawNavigationState {
    current_step: u32,
    total_steps: u32,
}

impl TryFrom<RawNavigationState> for NavigationState {
    type Error = NavigationError;

    fn try_from(raw: RawNavigationState) -> Result<Self, Self::Error> {
        let state = Self::new(raw.total_steps)?;
        // total_steps + 1 is the success pseudo-step
        if raw.current_step == 0 || raw.current_step > raw.total_steps.saturating_add(1) {
            return Err(NavigationError::StepOutOfRange {
                step: raw.current_step,
                total_steps: raw.total_steps,
            });
        }
        Ok(state.at(raw.current_step))
    }
}

impl NavigationState {
    pub fn new(total_steps: u32) -> Result<Self, NavigationError> {
        if total_steps == 0 {
            return Err(NavigationError::NoSteps);
        }
        Ok(Self {
            current_step: 1,
            total_steps,
        })
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn is_submitted(&self) -> bool {
        self.current_step > self.total_steps
    }

    /// `current_step / total_steps * 100`.
    ///
    /// Informational only; the progress bar uses its own table.
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.total_steps) * 100.0
    }

    fn at(self, step: u32) -> Self {
        Self {
            current_step: step,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    GoToStep(u32),
    Next,
    Prev,
    Reset,
    /// Registration accepted; show the success screen.
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    ScrollToTop,
}

pub struct NavigationStateMachine;

impl NavigationStateMachine {
    pub fn transition(
        state: NavigationState,
        event: NavigationEvent,
    ) -> (NavigationState, Vec<NavigationAction>) {
        let step = state.current_step;
        let total = state.total_steps;

        let target = match event {
            NavigationEvent::GoToStep(n) if (1..=total).contains(&n) => Some(n),
            NavigationEvent::Next if step < total => Some(step + 1),
            NavigationEvent::Prev if step > 1 => Some(step - 1),
            NavigationEvent::Reset => Some(1),
            NavigationEvent::Submitted if step <= total => Some(total + 1),
            _ => None,
        };

        match target {
            Some(next) => (state.at(next), vec![NavigationAction::ScrollToTop]),
            None => (state, Vec::new()),
        }
    }
}
