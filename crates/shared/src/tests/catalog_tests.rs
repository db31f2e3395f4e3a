use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{
    catalog::{client_by_id, dataset_for, CLIENTS, PERFORMANCE_YTD, REGIME_DATASETS, TASKS},
    domain::{AssetClass, ClientStatus, Regime, TaskStatus},
    error::DomainError,
};

#[test]
fn client_ids_are_unique() {
    let ids: HashSet<_> = CLIENTS.iter().map(|client| client.id).collect();
    assert_eq!(ids.len(), CLIENTS.len());
    assert_eq!(CLIENTS.len(), 7);
}

#[test]
fn task_ids_are_unique() {
    let ids: HashSet<_> = TASKS.iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), TASKS.len());
}

#[test]
fn every_last_contact_parses_as_iso_date() {
    for client in CLIENTS {
        client
            .last_contact_date()
            .unwrap_or_else(|err| panic!("{}: {err}", client.name));
    }
    let vance = client_by_id("C78910").expect("vance");
    assert_eq!(
        vance.last_contact_date().expect("date"),
        NaiveDate::from_ymd_opt(2024, 6, 28).expect("ymd")
    );
}

#[test]
fn regime_datasets_follow_menu_order_and_lookup() {
    let order: Vec<_> = REGIME_DATASETS.iter().map(|d| d.regime).collect();
    assert_eq!(order, Regime::ALL);
    assert_eq!(Regime::default(), Regime::Stagflation1970s);

    for dataset in REGIME_DATASETS {
        assert_eq!(dataset_for(dataset.regime), *dataset);
        let classes: Vec<_> = dataset.returns.iter().map(|p| p.asset_class).collect();
        assert_eq!(classes, AssetClass::ALL);
    }

    let crisis = dataset_for(Regime::FinancialCrisis2008);
    assert_eq!(crisis.returns[5].return_pct, -40.7);
}

#[test]
fn performance_series_starts_at_index_100() {
    assert_eq!(PERFORMANCE_YTD.first().map(|p| p.value), Some(100.0));
    assert_eq!(PERFORMANCE_YTD.last().map(|p| p.period), Some("Jul"));
}

#[test]
fn labels_parse_case_insensitively() {
    assert_eq!(
        " review pending ".parse::<ClientStatus>().expect("status"),
        ClientStatus::ReviewPending
    );
    assert_eq!(
        "2008 FINANCIAL CRISIS".parse::<Regime>().expect("regime"),
        Regime::FinancialCrisis2008
    );
    assert_eq!("urgent".parse::<TaskStatus>().expect("task"), TaskStatus::Urgent);
}

#[test]
fn unknown_label_reports_kind_and_value() {
    let err = "Roaring Twenties".parse::<Regime>().unwrap_err();
    assert!(matches!(err, DomainError::UnknownLabel { kind: "Regime", .. }));
    assert_eq!(err.to_string(), "unknown Regime `Roaring Twenties`");
}

#[test]
fn labels_are_the_serialized_form() {
    let json = serde_json::to_value(&CLIENTS[6]).expect("json");
    assert_eq!(json["status"], "Review Pending");
    assert_eq!(json["category"], "Trust");
    assert_eq!(json["id"], "C56789");
}
