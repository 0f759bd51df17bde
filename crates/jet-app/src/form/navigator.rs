use std::sync::{Arc, Mutex, PoisonError};

use jet_core::form::{
    NavigationAction, NavigationError, NavigationEvent, NavigationState, NavigationStateMachine,
};
use jet_core::ports::ViewportPort;
use tracing::debug;

/// Drives the navigation state machine and executes its side effects.
pub struct FormNavigator {
    state: Mutex<NavigationState>,
    viewport: Arc<dyn ViewportPort>,
}

impl FormNavigator {
    pub fn new(total_steps: u32, viewport: Arc<dyn ViewportPort>) -> Result<Self, NavigationError> {
        Ok(Self {
            state: Mutex::new(NavigationState::new(total_steps)?),
            viewport,
        })
    }

    pub fn go_to_step(&self, step: u32) -> NavigationState {
        self.dispatch(NavigationEvent::GoToStep(step))
    }

    pub fn next(&self) -> NavigationState {
        self.dispatch(NavigationEvent::Next)
    }

    pub fn prev(&self) -> NavigationState {
        self.dispatch(NavigationEvent::Prev)
    }

    pub fn reset(&self) -> NavigationState {
        self.dispatch(NavigationEvent::Reset)
    }

    /// Move to the success pseudo-step after a registration was stored.
    pub fn mark_submitted(&self) -> NavigationState {
        self.dispatch(NavigationEvent::Submitted)
    }

    pub fn state(&self) -> NavigationState {
        *self.lock()
    }

    pub fn current_step(&self) -> u32 {
        self.state().current_step()
    }

    pub fn total_steps(&self) -> u32 {
        self.state().total_steps()
    }

    pub fn progress(&self) -> f64 {
        self.state().progress()
    }

    fn dispatch(&self, event: NavigationEvent) -> NavigationState {
        let (from, next, actions) = {
            let mut guard = self.lock();
            let from = *guard;
            let (next, actions) = NavigationStateMachine::transition(from, event);
            *guard = next;
            (from, next, actions)
        };

        if actions.is_empty() {
            debug!(?event, step = from.current_step(), "navigation event ignored");
        } else {
            debug!(
                ?event,
                from = from.current_step(),
                to = next.current_step(),
                "form step transition"
            );
        }

        for action in actions {
            match action {
                NavigationAction::ScrollToTop => self.viewport.scroll_to_top(),
            }
        }
        next
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NavigationState> {
        // State is a plain Copy value, so a poisoned lock still holds a
        // consistent step.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
