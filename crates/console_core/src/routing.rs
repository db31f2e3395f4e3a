//! Closed view vocabulary for the sidebar and the panel each view composes.

use std::{fmt, str::FromStr};

use serde::Serialize;
use shared::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Dashboard,
    Clients,
    Workflows,
    Macroscope,
    Settings,
}

impl View {
    /// Sidebar order.
    pub const MENU: [View; 5] = [
        View::Dashboard,
        View::Clients,
        View::Workflows,
        View::Macroscope,
        View::Settings,
    ];

    pub fn id(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Clients => "clients",
            View::Workflows => "workflows",
            View::Macroscope => "macroscope",
            View::Settings => "settings",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Clients => "Clients",
            View::Workflows => "Workflows",
            View::Macroscope => "Macroscope",
            View::Settings => "Settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Command Console",
            View::Clients => "Client Hub",
            View::Workflows => "Automated Workflows",
            View::Macroscope => "The Macroscope™",
            View::Settings => "Platform Settings",
        }
    }

    pub fn panel(self) -> Panel {
        match self {
            View::Dashboard => Panel::Dashboard,
            View::Clients => Panel::ClientHub,
            View::Macroscope => Panel::Macroscope,
            View::Workflows | View::Settings => Panel::InDevelopment,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        View::MENU
            .into_iter()
            .find(|view| view.id() == id)
            .ok_or_else(|| DomainError::unknown("view", id))
    }
}

/// What the view selector currently points at.
///
/// Ids outside the menu are kept verbatim and always route to the
/// in-development placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ViewSelection {
    Menu(View),
    Unrecognized(String),
}

impl ViewSelection {
    pub fn from_id(id: &str) -> Self {
        match id.parse::<View>() {
            Ok(view) => ViewSelection::Menu(view),
            Err(_) => ViewSelection::Unrecognized(id.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ViewSelection::Menu(view) => view.id(),
            ViewSelection::Unrecognized(id) => id,
        }
    }

    /// Header title; empty for ids outside the menu.
    pub fn title(&self) -> &'static str {
        match self {
            ViewSelection::Menu(view) => view.title(),
            ViewSelection::Unrecognized(_) => "",
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            ViewSelection::Menu(view) => view.panel(),
            ViewSelection::Unrecognized(_) => Panel::InDevelopment,
        }
    }

    pub fn is(&self, view: View) -> bool {
        matches!(self, ViewSelection::Menu(current) if *current == view)
    }
}

impl Default for ViewSelection {
    fn default() -> Self {
        ViewSelection::Menu(View::Dashboard)
    }
}

impl From<View> for ViewSelection {
    fn from(view: View) -> Self {
        ViewSelection::Menu(view)
    }
}

/// The body composed under the shell header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Dashboard,
    ClientHub,
    Macroscope,
    InDevelopment,
}

pub const IN_DEVELOPMENT_HEADLINE: &str = "Feature In Development";
pub const IN_DEVELOPMENT_BODY: &str =
    "This module is currently being built. Please check back later.";
