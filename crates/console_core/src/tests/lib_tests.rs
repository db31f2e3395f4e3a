use chrono::NaiveDate;
use shared::{
    catalog::{dataset_for, CLIENTS, TASKS},
    domain::{ClientStatus, Regime},
};

use super::*;
use crate::{
    aggregate::{
        active_client_count, clients_with_status, dashboard_tasks, pending_task_count, total_aum,
    },
    format::{format_contact_date, format_return, format_usd},
    routing::{IN_DEVELOPMENT_BODY, IN_DEVELOPMENT_HEADLINE},
};

fn signed_in() -> ConsoleState {
    reduce(&ConsoleState::default(), &Action::Login(LoginForm::default()))
}

#[test]
fn defaults_match_a_fresh_launch() {
    let state = ConsoleState::default();
    assert_eq!(state.session(), Session::SignedOut);
    assert!(!state.is_signed_in());
    assert_eq!(state.view(), &ViewSelection::Menu(View::Dashboard));
    assert_eq!(state.panel(), Panel::Dashboard);
    assert_eq!(state.regime(), Regime::Stagflation1970s);
    assert!(state.dark_mode());
}

#[test]
fn only_three_menu_views_have_real_panels() {
    for view in View::MENU {
        let state = reduce(&signed_in(), &Action::SelectView(view.into()));
        let expected = match view {
            View::Dashboard => Panel::Dashboard,
            View::Clients => Panel::ClientHub,
            View::Macroscope => Panel::Macroscope,
            View::Workflows | View::Settings => Panel::InDevelopment,
        };
        assert_eq!(state.panel(), expected, "view {view}");
    }
}

#[test]
fn unrecognized_view_id_routes_to_placeholder_without_error() {
    let state = reduce(&signed_in(), &Action::select_view_id("dashbaord"));
    assert_eq!(
        state.view(),
        &ViewSelection::Unrecognized("dashbaord".to_string())
    );
    assert_eq!(state.panel(), Panel::InDevelopment);
    assert_eq!(state.title(), "");
}

#[test]
fn view_ids_parse_exactly() {
    assert_eq!("macroscope".parse::<View>().expect("view"), View::Macroscope);
    assert!("Macroscope".parse::<View>().is_err());
    assert!(" clients ".parse::<View>().is_err());
}

#[test]
fn padded_view_id_is_not_on_the_menu() {
    let state = reduce(&signed_in(), &Action::select_view_id(" clients "));
    assert_eq!(
        state.view(),
        &ViewSelection::Unrecognized(" clients ".to_string())
    );
    assert_eq!(state.panel(), Panel::InDevelopment);
    assert_eq!(state.title(), "");
}

#[test]
fn titles_follow_the_menu() {
    let titles: Vec<_> = View::MENU.iter().map(|view| view.title()).collect();
    assert_eq!(
        titles,
        [
            "Command Console",
            "Client Hub",
            "Automated Workflows",
            "The Macroscope™",
            "Platform Settings",
        ]
    );
}

#[test]
fn placeholder_copy_is_fixed() {
    assert_eq!(IN_DEVELOPMENT_HEADLINE, "Feature In Development");
    assert!(IN_DEVELOPMENT_BODY.starts_with("This module is currently being built."));
}

#[test]
fn login_ignores_submitted_values() {
    let blank = reduce(&ConsoleState::default(), &Action::Login(LoginForm::default()));
    let filled = reduce(
        &ConsoleState::default(),
        &Action::Login(LoginForm::new("nobody@example.com", "wrong")),
    );
    assert_eq!(blank, filled);
    assert_eq!(blank.session(), Session::DemoBypass);
}

#[test]
fn login_is_idempotent_once_signed_in() {
    let once = signed_in();
    let twice = reduce(&once, &Action::Login(LoginForm::new("x", "y")));
    assert_eq!(once, twice);
}

#[test]
fn no_action_signs_the_session_out() {
    let actions = [
        Action::select_view_id("settings"),
        Action::select_view_id("logout"),
        Action::SelectRegime(Regime::TechBoom1990s),
        Action::ToggleDarkMode,
        Action::Login(LoginForm::default()),
    ];
    let mut state = signed_in();
    for action in &actions {
        state = reduce(&state, action);
        assert!(state.is_signed_in(), "after {}", action.name());
    }
}

#[test]
fn login_form_debug_redacts_password() {
    let rendered = format!("{:?}", LoginForm::new("a.corbin@wealth.co", "hunter2"));
    assert!(rendered.contains("a.corbin@wealth.co"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn selecting_a_regime_swaps_the_dataset() {
    let state = reduce(&signed_in(), &Action::SelectRegime(Regime::FinancialCrisis2008));
    assert_eq!(state.regime(), Regime::FinancialCrisis2008);
    assert_eq!(
        state.regime_dataset(),
        dataset_for(Regime::FinancialCrisis2008)
    );
    let again = reduce(&state, &Action::SelectRegime(Regime::FinancialCrisis2008));
    assert_eq!(state, again);
}

#[test]
fn regime_selection_survives_leaving_the_macroscope() {
    let mut state = reduce(&signed_in(), &Action::select_view_id("macroscope"));
    state = reduce(&state, &Action::SelectRegime(Regime::PostPandemicReflation));
    state = reduce(&state, &Action::select_view_id("clients"));
    state = reduce(&state, &Action::select_view_id("macroscope"));
    assert_eq!(state.regime(), Regime::PostPandemicReflation);
}

#[test]
fn dark_mode_toggle_flips_each_time() {
    let once = reduce(&ConsoleState::default(), &Action::ToggleDarkMode);
    assert!(!once.dark_mode());
    let twice = reduce(&once, &Action::ToggleDarkMode);
    assert!(twice.dark_mode());
}

#[test]
fn reduce_leaves_input_state_untouched() {
    let before = signed_in();
    let snapshot = before.clone();
    let _ = reduce(&before, &Action::select_view_id("clients"));
    assert_eq!(before, snapshot);
}

#[test]
fn sample_book_aggregates() {
    assert_eq!(total_aum(CLIENTS), 1_036_700_000);
    assert_eq!(
        total_aum(CLIENTS),
        CLIENTS.iter().map(|client| client.aum_usd).sum::<u64>()
    );
    assert_eq!(active_client_count(CLIENTS), 4);
    assert_eq!(pending_task_count(TASKS), 3);
    assert_eq!(
        FirmOverview::from_catalog(),
        FirmOverview {
            total_aum_usd: 1_036_700_000,
            active_clients: 4,
            pending_tasks: 3,
        }
    );
}

#[test]
fn aggregates_over_empty_lists_are_zero() {
    let overview = FirmOverview::compute(&[], &[]);
    assert_eq!(overview.total_aum_usd, 0);
    assert_eq!(overview.active_clients, 0);
    assert_eq!(overview.pending_tasks, 0);
    assert!(dashboard_tasks(&[]).is_empty());
}

#[test]
fn dashboard_lists_first_four_tasks() {
    let shown = dashboard_tasks(TASKS);
    assert_eq!(shown.len(), 4);
    assert_eq!(shown[0].id, TASKS[0].id);
    assert_eq!(shown[3].id, TASKS[3].id);
}

#[test]
fn status_filter_keeps_catalog_order() {
    let names: Vec<_> = clients_with_status(CLIENTS, ClientStatus::Active)
        .map(|client| client.name)
        .collect();
    assert_eq!(
        names,
        [
            "Eleanor Vance",
            "Alistair Finch",
            "The Sterling Group",
            "Dr. Evelyn Reed"
        ]
    );
}

#[test]
fn usd_formatting_groups_thousands() {
    assert_eq!(format_usd(0), "$0");
    assert_eq!(format_usd(999), "$999");
    assert_eq!(format_usd(1_000), "$1,000");
    assert_eq!(format_usd(45_200_000), "$45,200,000");
    assert_eq!(format_usd(1_036_700_000), "$1,036,700,000");
}

#[test]
fn return_formatting_keeps_one_decimal_and_sign() {
    assert_eq!(format_return(24.1), "24.1%");
    assert_eq!(format_return(-38.4), "-38.4%");
    assert_eq!(format_return(100.0), "100.0%");
}

#[test]
fn contact_dates_use_short_month_form() {
    let date = NaiveDate::from_ymd_opt(2024, 7, 1).expect("ymd");
    assert_eq!(format_contact_date(date), "Jul 1, 2024");
}

#[test]
fn console_reports_changes_and_no_ops() {
    let mut console = Console::new();
    assert!(console.login(LoginForm::default()));
    assert!(!console.login(LoginForm::default()));
    assert!(console.select_view("clients"));
    assert!(!console.select_view("clients"));
    assert!(console.select_regime(Regime::TechBoom1990s));
    assert!(!console.select_regime(Regime::TechBoom1990s));
    assert!(console.toggle_dark_mode());
    assert!(!console.state().dark_mode());
}

#[test]
fn state_serializes_for_diagnostics() {
    let json = serde_json::to_value(signed_in()).expect("json");
    assert_eq!(json["session"], "demo_bypass");
    assert_eq!(json["view"]["kind"], "menu");
    assert_eq!(json["view"]["id"], "dashboard");
    assert_eq!(json["regime"], "1970s Stagflation");
    assert_eq!(json["dark_mode"], true);
}
