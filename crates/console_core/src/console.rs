use tracing::{debug, info, warn};

use crate::{
    routing::ViewSelection,
    session::LoginForm,
    state::{reduce, Action, ConsoleState},
};
use shared::domain::Regime;

/// Owns the single [`ConsoleState`] for the lifetime of an app instance.
#[derive(Debug, Default)]
pub struct Console {
    state: ConsoleState,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// Folds `action` into the current state. Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        if let Action::SelectView(ViewSelection::Unrecognized(id)) = &action {
            warn!(view = %id, "view id is not on the menu; showing placeholder");
        }

        let next = reduce(&self.state, &action);
        if next == self.state {
            debug!(action = action.name(), "action left console state unchanged");
            return false;
        }

        match &action {
            Action::Login(form) => {
                info!(email = %form.email, "demo login accepted without verification");
            }
            Action::SelectView(selection) => {
                info!(
                    from = self.state.view().id(),
                    to = selection.id(),
                    panel = ?next.panel(),
                    "view selected"
                );
            }
            Action::SelectRegime(regime) => info!(regime = %regime, "regime selected"),
            Action::ToggleDarkMode => info!(dark_mode = next.dark_mode(), "theme toggled"),
        }
        self.state = next;
        true
    }

    pub fn login(&mut self, form: LoginForm) -> bool {
        self.dispatch(Action::Login(form))
    }

    pub fn select_view(&mut self, id: &str) -> bool {
        self.dispatch(Action::select_view_id(id))
    }

    pub fn select_regime(&mut self, regime: Regime) -> bool {
        self.dispatch(Action::SelectRegime(regime))
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dispatch(Action::ToggleDarkMode)
    }
}
