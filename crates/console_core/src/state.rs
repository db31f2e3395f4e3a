use serde::Serialize;
use shared::{
    catalog::dataset_for,
    domain::{Regime, RegimeDataset},
};

use crate::{
    routing::{Panel, ViewSelection},
    session::{LoginForm, Session},
};

/// Everything the console remembers between interactions.
///
/// Values are never mutated in place; [`reduce`] builds the successor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleState {
    session: Session,
    view: ViewSelection,
    regime: Regime,
    dark_mode: bool,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            session: Session::SignedOut,
            view: ViewSelection::default(),
            regime: Regime::default(),
            dark_mode: true,
        }
    }
}

impl ConsoleState {
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    pub fn view(&self) -> &ViewSelection {
        &self.view
    }

    pub fn panel(&self) -> Panel {
        self.view.panel()
    }

    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn regime_dataset(&self) -> RegimeDataset {
        dataset_for(self.regime)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}

/// User interactions the console reacts to. There is no logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login(LoginForm),
    SelectView(ViewSelection),
    SelectRegime(Regime),
    ToggleDarkMode,
}

impl Action {
    /// Sidebar-style selection by raw id.
    pub fn select_view_id(id: &str) -> Self {
        Action::SelectView(ViewSelection::from_id(id))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Login(_) => "login",
            Action::SelectView(_) => "select_view",
            Action::SelectRegime(_) => "select_regime",
            Action::ToggleDarkMode => "toggle_dark_mode",
        }
    }
}

pub fn reduce(state: &ConsoleState, action: &Action) -> ConsoleState {
    let mut next = state.clone();
    match action {
        Action::Login(_) => next.session = Session::DemoBypass,
        Action::SelectView(selection) => next.view = selection.clone(),
        Action::SelectRegime(regime) => next.regime = *regime,
        Action::ToggleDarkMode => next.dark_mode = !state.dark_mode,
    }
    next
}
