use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident, $inner:ty) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(ClientId, &'static str);
id_newtype!(TaskId, u32);

/// Declares a closed enum whose variants carry a fixed display label.
///
/// The label is the serialized form and the only spelling `FromStr` accepts
/// (ASCII case-insensitive, surrounding whitespace ignored).
macro_rules! labeled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.label())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| DomainError::UnknownLabel {
                        kind: stringify!($name),
                        value: wanted.to_string(),
                    })
            }
        }
    };
}

labeled_enum!(ClientCategory {
    FamilyOffice => "Family Office",
    HnwIndividual => "HNW Individual",
    Foundation => "Foundation",
    Corporate => "Corporate",
    Trust => "Trust",
});

labeled_enum!(ClientStatus {
    Active => "Active",
    Onboarding => "Onboarding",
    Prospect => "Prospect",
    ReviewPending => "Review Pending",
});

labeled_enum!(TaskStatus {
    Pending => "Pending",
    Upcoming => "Upcoming",
    Urgent => "Urgent",
    Completed => "Completed",
});

impl TaskStatus {
    /// Pending and urgent tasks still need advisor attention.
    pub fn is_open(self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::Urgent)
    }
}

labeled_enum!(TaskIcon {
    Clock => "Clock",
    Calendar => "Calendar",
    Alert => "Alert",
    Check => "Check",
});

labeled_enum!(AssetClass {
    Commodities => "Commodities",
    RealEstate => "Real Estate",
    Gold => "Gold",
    UsEquities => "US Equities",
    UsBonds => "US Bonds",
    GlobalEquities => "Global Equities",
});

labeled_enum!(
    /// A named historical macroeconomic period keying one return dataset.
    Regime {
        Stagflation1970s => "1970s Stagflation",
        TechBoom1990s => "1990s Tech Boom",
        FinancialCrisis2008 => "2008 Financial Crisis",
        PostPandemicReflation => "Post-Pandemic Reflation",
    }
);

impl Default for Regime {
    fn default() -> Self {
        Regime::Stagflation1970s
    }
}

labeled_enum!(ActivityKind {
    ProfileUpdate => "Profile Update",
    Onboarding => "Onboarding",
    Report => "Report",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: &'static str,
    pub category: ClientCategory,
    pub aum_usd: u64,
    pub status: ClientStatus,
    pub advisor: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub last_contact: &'static str,
    pub risk_profile: &'static str,
}

impl ClientRecord {
    pub fn last_contact_date(&self) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(self.last_contact, "%Y-%m-%d").map_err(|source| {
            DomainError::InvalidDate {
                value: self.last_contact.to_string(),
                source,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub text: &'static str,
    pub status: TaskStatus,
    pub icon: TaskIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnPoint {
    pub asset_class: AssetClass,
    /// Annualized return in percent; negative for losses.
    pub return_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegimeDataset {
    pub regime: Regime,
    pub returns: &'static [ReturnPoint],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub period: &'static str,
    pub value: f64,
}

/// One line of the recent-activity feed; `emphasis` is the highlighted name
/// sitting between `lead` and `tail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub lead: &'static str,
    pub emphasis: &'static str,
    pub tail: &'static str,
}

impl ActivityItem {
    pub fn plain_text(&self) -> String {
        format!("{}{}{}", self.lead, self.emphasis, self.tail)
    }
}
