//! Menu business rules

use shared::models::{Menu, MenuCreate, MenuNameUpdate};

use super::{Op, OpsError, OpsResult, check_page, check_payload, check_required_text};
use crate::db::repository::MenuRepository;

#[derive(Clone)]
pub struct MenuOps {
    repo: MenuRepository,
}

impl MenuOps {
    pub fn new(repo: MenuRepository) -> Self {
        Self { repo }
    }

    fn check_name(op: Op, name: &str) -> OpsResult<()> {
        check_required_text(op, name, "Menu name not provided.", "Invalid menu name format.")
    }

    pub async fn create(&self, data: &MenuCreate) -> OpsResult<Menu> {
        Self::check_name(Op::CreateMenu, &data.name)?;
        check_payload(Op::CreateMenu, data)?;
        self.repo
            .create(data)
            .await
            .map_err(|e| OpsError::new(Op::CreateMenu, e))
    }

    pub async fn delete(&self, id: i64) -> OpsResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| OpsError::new(Op::DeleteMenu, e))
    }

    pub async fn update_name(&self, id: i64, data: &MenuNameUpdate) -> OpsResult<()> {
        Self::check_name(Op::UpdateMenuName, &data.name)?;
        check_payload(Op::UpdateMenuName, data)?;
        self.repo
            .update_name(id, data)
            .await
            .map_err(|e| OpsError::new(Op::UpdateMenuName, e))
    }

    pub async fn list(
        &self,
        page_index: i64,
        page_size: i64,
        sort_by: Option<&str>,
    ) -> OpsResult<Vec<Menu>> {
        let page = check_page(Op::GetMenuList, page_index, page_size)?;
        self.repo
            .list(page, sort_by)
            .await
            .map_err(|e| OpsError::new(Op::GetMenuList, e))
    }

    pub async fn get_by_id(&self, id: i64) -> OpsResult<Option<Menu>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| OpsError::new(Op::GetMenuById, e))
    }
}
