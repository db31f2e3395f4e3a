//! Fabricated sample book shown by the console. Nothing here changes at runtime.

use crate::domain::{
    ActivityItem, ActivityKind, AssetClass, ClientCategory, ClientId, ClientRecord,
    ClientStatus, PerformancePoint, Regime, RegimeDataset, ReturnPoint, TaskIcon, TaskId,
    TaskItem, TaskStatus,
};

pub const CLIENTS: &[ClientRecord] = &[
    ClientRecord {
        id: ClientId("C78910"),
        name: "Eleanor Vance",
        category: ClientCategory::FamilyOffice,
        aum_usd: 125_500_000,
        status: ClientStatus::Active,
        advisor: "A. Corbin",
        last_contact: "2024-06-28",
        risk_profile: "Balanced Growth",
    },
    ClientRecord {
        id: ClientId("C12345"),
        name: "Alistair Finch",
        category: ClientCategory::HnwIndividual,
        aum_usd: 45_200_000,
        status: ClientStatus::Active,
        advisor: "A. Corbin",
        last_contact: "2024-07-01",
        risk_profile: "Conservative",
    },
    ClientRecord {
        id: ClientId("C67890"),
        name: "The Sterling Group",
        category: ClientCategory::Foundation,
        aum_usd: 210_000_000,
        status: ClientStatus::Active,
        advisor: "L. Hayes",
        last_contact: "2024-06-25",
        risk_profile: "Growth",
    },
    ClientRecord {
        id: ClientId("C23456"),
        name: "Beatrice Chen",
        category: ClientCategory::HnwIndividual,
        aum_usd: 89_000_000,
        status: ClientStatus::Onboarding,
        advisor: "A. Corbin",
        last_contact: "2024-07-02",
        risk_profile: "Aggressive Growth",
    },
    ClientRecord {
        id: ClientId("C34567"),
        name: "Orion Industries",
        category: ClientCategory::Corporate,
        aum_usd: 350_000_000,
        status: ClientStatus::Prospect,
        advisor: "L. Hayes",
        last_contact: "2024-06-15",
        risk_profile: "N/A",
    },
    ClientRecord {
        id: ClientId("C45678"),
        name: "Dr. Evelyn Reed",
        category: ClientCategory::HnwIndividual,
        aum_usd: 62_000_000,
        status: ClientStatus::Active,
        advisor: "S. Patel",
        last_contact: "2024-06-29",
        risk_profile: "Balanced",
    },
    ClientRecord {
        id: ClientId("C56789"),
        name: "The Medici Trust",
        category: ClientCategory::Trust,
        aum_usd: 155_000_000,
        status: ClientStatus::ReviewPending,
        advisor: "L. Hayes",
        last_contact: "2024-05-30",
        risk_profile: "Conservative",
    },
];

pub const TASKS: &[TaskItem] = &[
    TaskItem {
        id: TaskId(1),
        text: "Finalize Beatrice Chen's Investment Policy Statement",
        status: TaskStatus::Pending,
        icon: TaskIcon::Clock,
    },
    TaskItem {
        id: TaskId(2),
        text: "Quarterly review for The Sterling Group",
        status: TaskStatus::Upcoming,
        icon: TaskIcon::Calendar,
    },
    TaskItem {
        id: TaskId(3),
        text: "AML/KYC documentation for Alistair Finch is expiring",
        status: TaskStatus::Urgent,
        icon: TaskIcon::Alert,
    },
    TaskItem {
        id: TaskId(4),
        text: "Prepare proposal for Orion Industries",
        status: TaskStatus::Pending,
        icon: TaskIcon::Clock,
    },
    TaskItem {
        id: TaskId(5),
        text: "Execute approved trades for Eleanor Vance portfolio",
        status: TaskStatus::Completed,
        icon: TaskIcon::Check,
    },
];

const fn point(asset_class: AssetClass, return_pct: f64) -> ReturnPoint {
    ReturnPoint {
        asset_class,
        return_pct,
    }
}

const STAGFLATION_1970S: &[ReturnPoint] = &[
    point(AssetClass::Commodities, 18.5),
    point(AssetClass::RealEstate, 12.3),
    point(AssetClass::Gold, 24.1),
    point(AssetClass::UsEquities, -1.2),
    point(AssetClass::UsBonds, 2.3),
    point(AssetClass::GlobalEquities, -0.5),
];

const TECH_BOOM_1990S: &[ReturnPoint] = &[
    point(AssetClass::Commodities, -2.1),
    point(AssetClass::RealEstate, 5.6),
    point(AssetClass::Gold, -3.5),
    point(AssetClass::UsEquities, 22.8),
    point(AssetClass::UsBonds, 6.7),
    point(AssetClass::GlobalEquities, 19.4),
];

const FINANCIAL_CRISIS_2008: &[ReturnPoint] = &[
    point(AssetClass::Commodities, -35.7),
    point(AssetClass::RealEstate, -25.1),
    point(AssetClass::Gold, 5.5),
    point(AssetClass::UsEquities, -38.4),
    point(AssetClass::UsBonds, 7.8),
    point(AssetClass::GlobalEquities, -40.7),
];

const POST_PANDEMIC_REFLATION: &[ReturnPoint] = &[
    point(AssetClass::Commodities, 25.2),
    point(AssetClass::RealEstate, 15.8),
    point(AssetClass::Gold, 6.1),
    point(AssetClass::UsEquities, 18.9),
    point(AssetClass::UsBonds, -4.3),
    point(AssetClass::GlobalEquities, 15.2),
];

/// In menu order; the first entry is the default selection.
pub const REGIME_DATASETS: &[RegimeDataset] = &[
    RegimeDataset {
        regime: Regime::Stagflation1970s,
        returns: STAGFLATION_1970S,
    },
    RegimeDataset {
        regime: Regime::TechBoom1990s,
        returns: TECH_BOOM_1990S,
    },
    RegimeDataset {
        regime: Regime::FinancialCrisis2008,
        returns: FINANCIAL_CRISIS_2008,
    },
    RegimeDataset {
        regime: Regime::PostPandemicReflation,
        returns: POST_PANDEMIC_REFLATION,
    },
];

pub fn dataset_for(regime: Regime) -> RegimeDataset {
    let returns = match regime {
        Regime::Stagflation1970s => STAGFLATION_1970S,
        Regime::TechBoom1990s => TECH_BOOM_1990S,
        Regime::FinancialCrisis2008 => FINANCIAL_CRISIS_2008,
        Regime::PostPandemicReflation => POST_PANDEMIC_REFLATION,
    };
    RegimeDataset { regime, returns }
}

pub const PERFORMANCE_YTD: &[PerformancePoint] = &[
    PerformancePoint { period: "Jan", value: 100.0 },
    PerformancePoint { period: "Feb", value: 102.0 },
    PerformancePoint { period: "Mar", value: 101.5 },
    PerformancePoint { period: "Apr", value: 104.0 },
    PerformancePoint { period: "May", value: 103.8 },
    PerformancePoint { period: "Jun", value: 105.2 },
    PerformancePoint { period: "Jul", value: 106.1 },
];

pub const RECENT_ACTIVITY: &[ActivityItem] = &[
    ActivityItem {
        kind: ActivityKind::ProfileUpdate,
        lead: "",
        emphasis: "L. Hayes",
        tail: " updated the risk profile for The Sterling Group.",
    },
    ActivityItem {
        kind: ActivityKind::Onboarding,
        lead: "New client ",
        emphasis: "Beatrice Chen",
        tail: " was added to the onboarding flow.",
    },
    ActivityItem {
        kind: ActivityKind::Report,
        lead: "A new report was generated for ",
        emphasis: "Eleanor Vance",
        tail: ".",
    },
];

pub fn client_by_id(id: &str) -> Option<&'static ClientRecord> {
    CLIENTS.iter().find(|client| client.id.0 == id)
}
