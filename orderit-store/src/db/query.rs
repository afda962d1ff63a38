//! Sort/page query construction for list reads.
//!
//! The GUI hands over a loosely-typed sort string ("width desc, name") plus a
//! zero-based page window. This module parses the string once into typed
//! terms, resolves each field against the entity's sortable-column namespace
//! and appends a deterministic `ORDER BY ... LIMIT ? OFFSET ?` tail to a base
//! SELECT. The base is never modified; LIMIT and OFFSET are bound parameters.
//!
//! Grammar: comma-separated terms, each an exposed field name optionally
//! followed by a case-insensitive `ASC`/`DESC` token (default `ASC`).
//! Whitespace around commas and between name and direction is insignificant.
//! An empty or missing expression means no ordering at all, not a default one.

use super::repository::{RepoError, RepoResult};

/// Ordered mapping from exposed sort-field name to SQL column, fixed per
/// entity at compile time.
pub type SortColumns = &'static [(&'static str, &'static str)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

/// One resolved `(column, direction)` ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortTerm {
    pub column: &'static str,
    pub direction: SortDirection,
}

/// Zero-based page window. The business-rule layer rejects negative indices
/// and sizes below 1 before this is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: i64,
    pub size: i64,
}

impl Page {
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// `index * size`, refusing to wrap.
    pub fn offset(&self) -> RepoResult<i64> {
        self.index
            .checked_mul(self.size)
            .ok_or(RepoError::PageOutOfRange)
    }
}

/// Parse a sort expression against an entity's column namespace.
///
/// `None` and blank input yield no terms. Term order is preserved: the first
/// term is the primary sort key, later terms break ties. An unknown field
/// name is a hard error rather than being silently dropped.
pub fn parse_sort_by(columns: SortColumns, sort_by: Option<&str>) -> RepoResult<Vec<SortTerm>> {
    let Some(expr) = sort_by else {
        return Ok(Vec::new());
    };
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut terms = Vec::new();
    for raw in expr.split(',') {
        let term = raw.trim();
        if term.is_empty() {
            return Err(RepoError::InvalidSortExpression(expr.to_string()));
        }

        // Split off a trailing direction token on the last whitespace run;
        // anything else is part of the field name.
        let (name, direction) = match term.rsplit_once(char::is_whitespace) {
            Some((head, tail)) => match SortDirection::from_token(tail) {
                Some(direction) => (head.trim_end(), direction),
                None => (term, SortDirection::Asc),
            },
            None => (term, SortDirection::Asc),
        };
        if name.is_empty() {
            return Err(RepoError::InvalidSortExpression(expr.to_string()));
        }

        let column = columns
            .iter()
            .find(|(exposed, _)| *exposed == name)
            .map(|(_, column)| *column)
            .ok_or_else(|| RepoError::InvalidSortField(name.to_string()))?;
        terms.push(SortTerm { column, direction });
    }
    Ok(terms)
}

/// Append ordering and paging to a base SELECT, returning a new statement.
///
/// With no terms only `LIMIT ? OFFSET ?` is appended. Ascending clauses carry
/// no direction token, matching the database default.
pub fn build_list_sql(base: &str, terms: &[SortTerm]) -> String {
    let mut sql = String::from(base);
    if !terms.is_empty() {
        sql.push_str(" ORDER BY ");
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(term.column);
            if term.direction == SortDirection::Desc {
                sql.push_str(" DESC");
            }
        }
    }
    sql.push_str(" LIMIT ? OFFSET ?");
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: SortColumns = &[
        ("id", "id"),
        ("created_on", "created_on"),
        ("username", "username"),
    ];

    const BASE: &str = "SELECT id, created_on, username FROM mock_entities";

    fn sql_for(sort_by: Option<&str>) -> String {
        let terms = parse_sort_by(COLUMNS, sort_by).unwrap();
        build_list_sql(BASE, &terms)
    }

    fn assert_order_by(sort_by: &str, expected: &str) {
        let sql = sql_for(Some(sort_by));
        assert_eq!(
            sql,
            format!("{BASE} ORDER BY {expected} LIMIT ? OFFSET ?"),
            "sort_by: {sort_by:?}"
        );
    }

    #[test]
    fn none_and_blank_produce_no_order_by() {
        for input in [None, Some(""), Some("   ")] {
            let sql = sql_for(input);
            assert!(!sql.contains("ORDER BY"), "input: {input:?}");
            assert!(sql.ends_with(" LIMIT ? OFFSET ?"));
        }
    }

    #[test]
    fn single_column() {
        assert_order_by("username", "username");
        assert_order_by("username ASC", "username");
        assert_order_by("username DESC", "username DESC");
    }

    #[test]
    fn direction_token_is_case_insensitive() {
        assert_order_by("username desc", "username DESC");
        assert_order_by("username Desc", "username DESC");
        assert_order_by("username asc", "username");
    }

    #[test]
    fn two_columns_keep_declaration_order() {
        assert_order_by("username, created_on", "username, created_on");
        assert_order_by("username, created_on DESC", "username, created_on DESC");
        assert_order_by("username ASC, created_on ASC", "username, created_on");
        assert_order_by("username DESC, created_on", "username DESC, created_on");
        assert_order_by(
            "username DESC, created_on DESC",
            "username DESC, created_on DESC",
        );
    }

    #[test]
    fn three_columns_keep_declaration_order() {
        assert_order_by(
            "username, created_on DESC, id",
            "username, created_on DESC, id",
        );
        assert_order_by(
            "username DESC, created_on DESC, id DESC",
            "username DESC, created_on DESC, id DESC",
        );
        assert_order_by(
            "username ASC, created_on DESC, id ASC",
            "username, created_on DESC, id",
        );
    }

    #[test]
    fn whitespace_around_commas_is_insignificant() {
        assert_order_by("  username  ,   created_on    desc ", "username, created_on DESC");
        assert_order_by("username\tdesc", "username DESC");
    }

    #[test]
    fn ascending_never_emits_a_direction_token() {
        let sql = sql_for(Some("username ASC, created_on"));
        assert!(!sql.contains(" ASC"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse_sort_by(COLUMNS, Some("password_hash")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidSortField(f) if f == "password_hash"));

        // Multi-word leftovers are a field-name miss, not a direction
        let err = parse_sort_by(COLUMNS, Some("username descending")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidSortField(f) if f == "username descending"));
    }

    #[test]
    fn empty_term_is_rejected() {
        for input in [", username", "username,", "username,,id", " , "] {
            let err = parse_sort_by(COLUMNS, Some(input)).unwrap_err();
            assert!(
                matches!(err, RepoError::InvalidSortExpression(_)),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn bare_direction_token_is_a_field_name_miss() {
        let err = parse_sort_by(COLUMNS, Some("desc")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidSortField(f) if f == "desc"));
    }

    #[test]
    fn builder_is_idempotent_and_leaves_base_untouched() {
        let base = String::from(BASE);
        let terms = parse_sort_by(COLUMNS, Some("created_on desc, id")).unwrap();
        let first = build_list_sql(&base, &terms);
        let second = build_list_sql(&base, &terms);
        assert_eq!(first, second);
        assert_eq!(base, BASE);
        assert!(!base.contains("ORDER BY"));
    }

    #[test]
    fn page_offset_is_index_times_size() {
        assert_eq!(Page { index: 0, size: 10 }.offset().unwrap(), 0);
        assert_eq!(Page { index: 3, size: 25 }.offset().unwrap(), 75);
        assert_eq!(Page { index: 1, size: 2 }.limit(), 2);
    }

    #[test]
    fn page_offset_refuses_to_wrap() {
        let page = Page {
            index: i64::MAX,
            size: 2,
        };
        assert!(matches!(page.offset(), Err(RepoError::PageOutOfRange)));
    }
}
