//! Business-rule layer
//!
//! Validates input, checks the page window before any query is built, then
//! delegates to the repositories. Every failure comes back tagged with the
//! operation it belongs to, with the underlying cause preserved. No retries:
//! failures surface synchronously to the caller (the GUI) for translation
//! into user-facing messages.

pub mod dining_table;
pub mod menu;
pub mod tag;
pub mod user;

pub use dining_table::DiningTableOps;
pub use menu::MenuOps;
pub use tag::TagOps;
pub use user::UserOps;

use std::fmt;

use thiserror::Error;
use validator::Validate;

use crate::db::query::Page;
use crate::db::repository::RepoError;

/// Operation tag carried by every business-rule error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    CreateDiningTable,
    DeleteDiningTable,
    UpdateDiningTableName,
    UpdatePosition,
    UpdateSize,
    GetDiningTableList,
    GetDiningTableById,
    CreateMenu,
    DeleteMenu,
    UpdateMenuName,
    GetMenuList,
    GetMenuById,
    CreateTag,
    DeleteTag,
    UpdateTagName,
    GetTagList,
    GetTagById,
    CreateUser,
    DeleteUser,
    ChangePassword,
    GetUserList,
    GetUserById,
    GetUserByUsername,
    ValidatePin,
    Login,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::CreateDiningTable => "create dining table",
            Op::DeleteDiningTable => "delete dining table",
            Op::UpdateDiningTableName => "update dining table name",
            Op::UpdatePosition => "update position",
            Op::UpdateSize => "update size",
            Op::GetDiningTableList => "get dining table list",
            Op::GetDiningTableById => "get dining table by id",
            Op::CreateMenu => "create menu",
            Op::DeleteMenu => "delete menu",
            Op::UpdateMenuName => "update menu name",
            Op::GetMenuList => "get menu list",
            Op::GetMenuById => "get menu by id",
            Op::CreateTag => "create tag",
            Op::DeleteTag => "delete tag",
            Op::UpdateTagName => "update tag name",
            Op::GetTagList => "get tag list",
            Op::GetTagById => "get tag by id",
            Op::CreateUser => "create user",
            Op::DeleteUser => "delete user",
            Op::ChangePassword => "change password",
            Op::GetUserList => "get user list",
            Op::GetUserById => "get user by id",
            Op::GetUserByUsername => "get user by username",
            Op::ValidatePin => "validate pin",
            Op::Login => "login",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong, independent of which operation it happened in.
#[derive(Debug, Error)]
pub enum OpsErrorKind {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid page index.")]
    InvalidPageIndex,

    #[error("Invalid page size.")]
    InvalidPageSize,

    #[error(transparent)]
    Persistence(#[from] RepoError),
}

/// Business-rule error: an operation tag plus the underlying cause.
#[derive(Debug, Error)]
#[error("{op} failed: {kind}")]
pub struct OpsError {
    pub op: Op,
    #[source]
    pub kind: OpsErrorKind,
}

impl OpsError {
    pub(crate) fn new(op: Op, kind: impl Into<OpsErrorKind>) -> Self {
        Self {
            op,
            kind: kind.into(),
        }
    }

    /// True when the targeted record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, OpsErrorKind::Persistence(RepoError::NotFound))
    }
}

/// Result type for business-rule operations
pub type OpsResult<T> = Result<T, OpsError>;

/// Reject an invalid page window before any storage call happens.
pub(crate) fn check_page(op: Op, page_index: i64, page_size: i64) -> OpsResult<Page> {
    if page_index < 0 {
        return Err(OpsError::new(op, OpsErrorKind::InvalidPageIndex));
    }
    if page_size < 1 {
        return Err(OpsError::new(op, OpsErrorKind::InvalidPageSize));
    }
    Ok(Page {
        index: page_index,
        size: page_size,
    })
}

/// Run a payload's `validator` rules, tagging failures with the operation.
pub(crate) fn check_payload(op: Op, payload: &impl Validate) -> OpsResult<()> {
    payload
        .validate()
        .map_err(|e| OpsError::new(op, OpsErrorKind::Validation(e.to_string())))
}

/// Non-empty, non-blank text check shared by the name/password rules.
pub(crate) fn check_required_text(
    op: Op,
    text: &str,
    missing: &str,
    malformed: &str,
) -> OpsResult<()> {
    if text.is_empty() {
        return Err(OpsError::new(op, OpsErrorKind::Validation(missing.into())));
    }
    if text.trim().is_empty() {
        return Err(OpsError::new(
            op,
            OpsErrorKind::Validation(malformed.into()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_bounds() {
        assert!(check_page(Op::GetMenuList, 0, 1).is_ok());
        assert!(check_page(Op::GetMenuList, 5, 100).is_ok());

        let err = check_page(Op::GetMenuList, -1, 10).unwrap_err();
        assert!(matches!(err.kind, OpsErrorKind::InvalidPageIndex));
        assert_eq!(err.op, Op::GetMenuList);

        let err = check_page(Op::GetMenuList, 0, 0).unwrap_err();
        assert!(matches!(err.kind, OpsErrorKind::InvalidPageSize));
    }

    #[test]
    fn required_text_distinguishes_missing_from_blank() {
        let err = check_required_text(Op::CreateTag, "", "missing", "malformed").unwrap_err();
        assert!(matches!(err.kind, OpsErrorKind::Validation(ref m) if m == "missing"));

        let err = check_required_text(Op::CreateTag, "   ", "missing", "malformed").unwrap_err();
        assert!(matches!(err.kind, OpsErrorKind::Validation(ref m) if m == "malformed"));

        assert!(check_required_text(Op::CreateTag, "Drinks", "missing", "malformed").is_ok());
    }

    #[test]
    fn ops_error_renders_operation_and_cause() {
        let err = OpsError::new(Op::DeleteMenu, RepoError::NotFound);
        assert_eq!(err.to_string(), "delete menu failed: No rows were affected");
        assert!(err.is_not_found());
    }
}
