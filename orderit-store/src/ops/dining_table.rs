//! Dining-table business rules
//!
//! Floor-plan operations: create, rename, drag (position), resize, delete,
//! paged listing for the admin screen.

use shared::models::{
    DiningTable, DiningTableCreate, DiningTableNameUpdate, DiningTablePositionUpdate,
    DiningTableSizeUpdate,
};

use super::{Op, OpsError, OpsResult, check_page, check_payload, check_required_text};
use crate::db::repository::DiningTableRepository;

#[derive(Clone)]
pub struct DiningTableOps {
    repo: DiningTableRepository,
}

impl DiningTableOps {
    pub fn new(repo: DiningTableRepository) -> Self {
        Self { repo }
    }

    fn check_name(op: Op, name: &str) -> OpsResult<()> {
        check_required_text(
            op,
            name,
            "Dining table name not provided.",
            "Invalid dining table name format.",
        )
    }

    pub async fn create(&self, data: &DiningTableCreate) -> OpsResult<DiningTable> {
        Self::check_name(Op::CreateDiningTable, &data.name)?;
        check_payload(Op::CreateDiningTable, data)?;
        self.repo
            .create(data)
            .await
            .map_err(|e| OpsError::new(Op::CreateDiningTable, e))
    }

    pub async fn delete(&self, id: i64) -> OpsResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| OpsError::new(Op::DeleteDiningTable, e))
    }

    pub async fn update_name(&self, id: i64, data: &DiningTableNameUpdate) -> OpsResult<()> {
        Self::check_name(Op::UpdateDiningTableName, &data.name)?;
        check_payload(Op::UpdateDiningTableName, data)?;
        self.repo
            .update_name(id, data)
            .await
            .map_err(|e| OpsError::new(Op::UpdateDiningTableName, e))
    }

    pub async fn update_position(&self, id: i64, data: &DiningTablePositionUpdate) -> OpsResult<()> {
        check_payload(Op::UpdatePosition, data)?;
        self.repo
            .update_position(id, data)
            .await
            .map_err(|e| OpsError::new(Op::UpdatePosition, e))
    }

    pub async fn update_size(&self, id: i64, data: &DiningTableSizeUpdate) -> OpsResult<()> {
        check_payload(Op::UpdateSize, data)?;
        self.repo
            .update_size(id, data)
            .await
            .map_err(|e| OpsError::new(Op::UpdateSize, e))
    }

    pub async fn list(
        &self,
        page_index: i64,
        page_size: i64,
        sort_by: Option<&str>,
    ) -> OpsResult<Vec<DiningTable>> {
        let page = check_page(Op::GetDiningTableList, page_index, page_size)?;
        self.repo
            .list(page, sort_by)
            .await
            .map_err(|e| OpsError::new(Op::GetDiningTableList, e))
    }

    pub async fn get_by_id(&self, id: i64) -> OpsResult<Option<DiningTable>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| OpsError::new(Op::GetDiningTableById, e))
    }
}
