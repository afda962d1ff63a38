//! Tag business rules

use shared::models::{Tag, TagCreate, TagNameUpdate};

use super::{Op, OpsError, OpsResult, check_page, check_payload, check_required_text};
use crate::db::repository::TagRepository;

#[derive(Clone)]
pub struct TagOps {
    repo: TagRepository,
}

impl TagOps {
    pub fn new(repo: TagRepository) -> Self {
        Self { repo }
    }

    fn check_name(op: Op, name: &str) -> OpsResult<()> {
        check_required_text(op, name, "Tag name not provided.", "Invalid tag name format.")
    }

    pub async fn create(&self, data: &TagCreate) -> OpsResult<Tag> {
        Self::check_name(Op::CreateTag, &data.name)?;
        check_payload(Op::CreateTag, data)?;
        self.repo
            .create(data)
            .await
            .map_err(|e| OpsError::new(Op::CreateTag, e))
    }

    pub async fn delete(&self, id: i64) -> OpsResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| OpsError::new(Op::DeleteTag, e))
    }

    pub async fn update_name(&self, id: i64, data: &TagNameUpdate) -> OpsResult<()> {
        Self::check_name(Op::UpdateTagName, &data.name)?;
        check_payload(Op::UpdateTagName, data)?;
        self.repo
            .update_name(id, data)
            .await
            .map_err(|e| OpsError::new(Op::UpdateTagName, e))
    }

    pub async fn list(
        &self,
        page_index: i64,
        page_size: i64,
        sort_by: Option<&str>,
    ) -> OpsResult<Vec<Tag>> {
        let page = check_page(Op::GetTagList, page_index, page_size)?;
        self.repo
            .list(page, sort_by)
            .await
            .map_err(|e| OpsError::new(Op::GetTagList, e))
    }

    pub async fn get_by_id(&self, id: i64) -> OpsResult<Option<Tag>> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| OpsError::new(Op::GetTagById, e))
    }
}
