use serde::Serialize;
use shared::{
    catalog::{CLIENTS, TASKS},
    domain::{ClientRecord, ClientStatus, TaskItem},
};

/// How many tasks the dashboard's "My Tasks" card lists.
pub const DASHBOARD_TASK_LIMIT: usize = 4;

pub fn total_aum(clients: &[ClientRecord]) -> u64 {
    clients.iter().map(|client| client.aum_usd).sum()
}

pub fn active_client_count(clients: &[ClientRecord]) -> usize {
    clients
        .iter()
        .filter(|client| client.status == ClientStatus::Active)
        .count()
}

/// Tasks that are pending or urgent.
pub fn pending_task_count(tasks: &[TaskItem]) -> usize {
    tasks.iter().filter(|task| task.status.is_open()).count()
}

pub fn clients_with_status(
    clients: &[ClientRecord],
    status: ClientStatus,
) -> impl Iterator<Item = &ClientRecord> {
    clients.iter().filter(move |client| client.status == status)
}

pub fn dashboard_tasks(tasks: &[TaskItem]) -> &[TaskItem] {
    &tasks[..tasks.len().min(DASHBOARD_TASK_LIMIT)]
}

/// Figures on the dashboard's "Firm Overview" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirmOverview {
    pub total_aum_usd: u64,
    pub active_clients: usize,
    pub pending_tasks: usize,
}

impl FirmOverview {
    pub fn compute(clients: &[ClientRecord], tasks: &[TaskItem]) -> Self {
        Self {
            total_aum_usd: total_aum(clients),
            active_clients: active_client_count(clients),
            pending_tasks: pending_task_count(tasks),
        }
    }

    pub fn from_catalog() -> Self {
        Self::compute(CLIENTS, TASKS)
    }
}
