//! Translation of [`AdvocateQuery`] into parameterized SQLite SQL.
//!
//! Column names are interpolated from [`Column::as_str`], which only yields
//! fixed identifiers. Every user-supplied value is bound as a parameter.
//! Placeholders are anonymous (`?`), so parameters are kept in the order
//! their placeholders appear in the SQL text.

use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

use crate::types::{AdvocateQuery, Column, Condition, SortKey};

use super::backend::UNICODE_LOWER;

/// Columns selected for every advocate row, in `row_to_advocate` order.
pub(crate) const SELECT_COLUMNS: &str = "id, first_name, last_name, city, degree, specialties, \
     years_of_experience, phone_number, created_at";

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlFragment {
    /// The SQL clause.
    pub sql: String,
    /// Bound parameter values.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// String parameter.
    String(String),
    /// Integer parameter.
    Integer(i64),
}

impl SqlParam {
    /// Creates a string parameter.
    pub fn string(s: impl Into<String>) -> Self {
        SqlParam::String(s.into())
    }

    /// Creates an integer parameter.
    pub fn integer(i: i64) -> Self {
        SqlParam::Integer(i)
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::String(s) => s.to_sql(),
            SqlParam::Integer(i) => i.to_sql(),
        }
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Creates a fragment with parameters.
    pub fn with_params(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Combines with another fragment using AND.
    pub fn and(self, other: SqlFragment) -> Self {
        self.join(other, "AND")
    }

    /// Combines with another fragment using OR.
    pub fn or(self, other: SqlFragment) -> Self {
        self.join(other, "OR")
    }

    /// Returns true if the fragment carries no SQL.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    fn join(mut self, other: SqlFragment, op: &str) -> Self {
        if !self.sql.is_empty() && !other.sql.is_empty() {
            self.sql = format!("({}) {} ({})", self.sql, op, other.sql);
        } else if !other.sql.is_empty() {
            self.sql = other.sql;
        }
        self.params.extend(other.params);
        self
    }
}

/// Escapes `LIKE` wildcards so the value matches literally.
///
/// Pairs with `ESCAPE '\'` in the generated clause.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds SQL for advocate queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the complete `SELECT` statement for a query.
    pub fn build_select(&self, query: &AdvocateQuery) -> SqlFragment {
        let mut fragment = SqlFragment::new(format!("SELECT {} FROM advocates", SELECT_COLUMNS));

        let filter = self.build_where(&query.conditions);
        if !filter.is_empty() {
            fragment.sql.push_str(" WHERE ");
            fragment.sql.push_str(&filter.sql);
            fragment.params.extend(filter.params);
        }

        fragment.sql.push_str(" ORDER BY ");
        fragment.sql.push_str(&self.build_order_by(&query.sort));

        fragment.sql.push_str(" LIMIT ? OFFSET ?");
        fragment.params.push(SqlParam::integer(i64::from(query.limit)));
        fragment
            .params
            .push(SqlParam::integer(i64::try_from(query.offset).unwrap_or(i64::MAX)));

        fragment
    }

    /// Combines top-level conditions with AND. Returns an empty fragment
    /// when there are none.
    pub fn build_where(&self, conditions: &[Condition]) -> SqlFragment {
        conditions
            .iter()
            .map(|c| self.build_condition(c))
            .fold(SqlFragment::new(""), SqlFragment::and)
    }

    /// Renders a single condition.
    pub fn build_condition(&self, condition: &Condition) -> SqlFragment {
        match condition {
            // Both sides are folded with the same Unicode lowercasing.
            Condition::Contains { column, value } => SqlFragment::with_params(
                format!(
                    "{}({}) LIKE '%' || ? || '%' ESCAPE '\\'",
                    UNICODE_LOWER, column
                ),
                vec![SqlParam::string(escape_like(&value.to_lowercase()))],
            ),
            Condition::Eq { column, value } => {
                SqlFragment::with_params(format!("{} = ?", column), vec![SqlParam::integer(*value)])
            }
            Condition::Gte { column, value } => {
                SqlFragment::with_params(format!("{} >= ?", column), vec![SqlParam::integer(*value)])
            }
            Condition::Lte { column, value } => {
                SqlFragment::with_params(format!("{} <= ?", column), vec![SqlParam::integer(*value)])
            }
            Condition::HasTag { column, tag } => SqlFragment::with_params(
                format!(
                    "EXISTS (SELECT 1 FROM json_each(advocates.{}) WHERE json_each.value = ?)",
                    column
                ),
                vec![SqlParam::string(tag.clone())],
            ),
            Condition::Any(inner) if inner.is_empty() => SqlFragment::new("0"),
            Condition::Any(inner) => inner
                .iter()
                .map(|c| self.build_condition(c))
                .fold(SqlFragment::new(""), SqlFragment::or),
            Condition::All(inner) if inner.is_empty() => SqlFragment::new("1"),
            Condition::All(inner) => inner
                .iter()
                .map(|c| self.build_condition(c))
                .fold(SqlFragment::new(""), SqlFragment::and),
        }
    }

    /// Renders ascending sort keys. Falls back to identity order.
    pub fn build_order_by(&self, sort: &[SortKey]) -> String {
        if sort.is_empty() {
            return format!("{} ASC", Column::Id);
        }
        sort.iter()
            .map(|key| format!("{} ASC", key.column))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
