use serde::Serialize;

use super::status::{PlanLine, StatusLog};

#[derive(Serialize)]
pub struct PrunePlan {
    pub site: String,
    pub force: bool,
    pub urls: usize,
    pub would_delete: usize,
    pub items: Vec<PlanLine>,
}

#[derive(Serialize)]
pub struct PruneTotals {
    pub deleted: usize,
    pub not_found: usize,
    pub failed: usize,
}

#[derive(Serialize)]
pub struct PruneResult {
    pub site: String,
    pub force: bool,
    pub totals: PruneTotals,
    pub lines: StatusLog,
}
