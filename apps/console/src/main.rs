use std::fmt::Write as _;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console_core::{
    aggregate::clients_with_status,
    format::{format_contact_date, format_return, format_usd},
    Console, FirmOverview, LoginForm, Panel,
};
use serde::Serialize;
use shared::{
    catalog::{
        dataset_for, CLIENTS, PERFORMANCE_YTD, RECENT_ACTIVITY, REGIME_DATASETS, TASKS,
    },
    domain::{ClientRecord, ClientStatus, Regime, TaskItem},
};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "info";

/// Operati console without a window: the same catalog and view routing,
/// printed as text or JSON.
#[derive(Parser, Debug)]
#[command(name = "operati")]
struct Args {
    /// Print JSON instead of aligned text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Firm overview figures and recent activity from the dashboard.
    Overview,
    /// Client registry, optionally filtered by status label.
    Clients {
        #[arg(long)]
        status: Option<ClientStatus>,
    },
    Tasks {
        /// Only pending or urgent tasks.
        #[arg(long)]
        open: bool,
    },
    /// Economic regimes in menu order.
    Regimes,
    /// Annualized asset-class returns for one regime label.
    Regime { key: Regime },
    /// Year-to-date portfolio performance series.
    Performance,
    /// Which panel a view id routes to after sign-in.
    Route { id: String },
}

#[derive(Debug, Serialize)]
struct RouteReport {
    id: String,
    title: &'static str,
    panel: Panel,
    on_menu: bool,
}

fn route(id: &str) -> RouteReport {
    let mut console = Console::new();
    console.login(LoginForm::default());
    console.select_view(id);
    let state = console.state();
    RouteReport {
        id: state.view().id().to_string(),
        title: state.title(),
        panel: state.panel(),
        on_menu: !state.title().is_empty(),
    }
}

fn selected_clients(status: Option<ClientStatus>) -> Vec<&'static ClientRecord> {
    match status {
        Some(status) => clients_with_status(CLIENTS, status).collect(),
        None => CLIENTS.iter().collect(),
    }
}

fn selected_tasks(open: bool) -> Vec<&'static TaskItem> {
    TASKS
        .iter()
        .filter(|task| !open || task.status.is_open())
        .collect()
}

fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn contact_text(client: &ClientRecord) -> Result<String> {
    Ok(format_contact_date(client.last_contact_date()?))
}

fn render(command: &Command, json: bool) -> Result<String> {
    let mut out = String::new();
    match command {
        Command::Overview => {
            let overview = FirmOverview::from_catalog();
            if json {
                return to_json(&overview);
            }
            writeln!(out, "Total AUM      {}", format_usd(overview.total_aum_usd))?;
            writeln!(out, "Active Clients {}", overview.active_clients)?;
            writeln!(out, "Pending Tasks  {}", overview.pending_tasks)?;
            writeln!(out)?;
            writeln!(out, "Recent Activity")?;
            for item in RECENT_ACTIVITY {
                writeln!(out, "  {}", item.plain_text())?;
            }
        }
        Command::Clients { status } => {
            let clients = selected_clients(*status);
            if json {
                return to_json(&clients);
            }
            for client in clients {
                writeln!(
                    out,
                    "{:<8} {:<28} {:<15} {:>15} {:<15} {:<16} {}",
                    client.id,
                    client.name,
                    client.category,
                    format_usd(client.aum_usd),
                    client.status,
                    client.advisor,
                    contact_text(client)?,
                )?;
            }
        }
        Command::Tasks { open } => {
            let tasks = selected_tasks(*open);
            if json {
                return to_json(&tasks);
            }
            for task in tasks {
                writeln!(out, "{:>3}  {:<9} {}", task.id, task.status, task.text)?;
            }
        }
        Command::Regimes => {
            let labels: Vec<&str> = REGIME_DATASETS
                .iter()
                .map(|dataset| dataset.regime.label())
                .collect();
            if json {
                return to_json(&labels);
            }
            for label in labels {
                writeln!(out, "{label}")?;
            }
        }
        Command::Regime { key } => {
            let dataset = dataset_for(*key);
            if json {
                return to_json(&dataset);
            }
            writeln!(out, "{}", dataset.regime)?;
            for point in dataset.returns {
                writeln!(
                    out,
                    "  {:<14} {:>7}",
                    point.asset_class.label(),
                    format_return(point.return_pct)
                )?;
            }
        }
        Command::Performance => {
            if json {
                return to_json(&PERFORMANCE_YTD);
            }
            for point in PERFORMANCE_YTD {
                writeln!(out, "{:<4} {:>6.1}", point.period, point.value)?;
            }
        }
        Command::Route { id } => {
            let report = route(id);
            if json {
                return to_json(&report);
            }
            let title = if report.on_menu {
                report.title
            } else {
                "(not on menu)"
            };
            writeln!(out, "{} -> {:?} {}", report.id, report.panel, title)?;
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    tracing::debug!(command = ?args.command, json = args.json, "running");

    print!("{}", render(&args.command, args.json)?);
    Ok(())
}
