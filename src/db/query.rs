//! Typed filter builder for the reporting queries
//!
//! Every report endpoint follows the same shape: an optional set of
//! equality/range filters compiled into a parameterized WHERE clause that
//! is shared by a COUNT query and a paged data query. This module replaces
//! ad-hoc string assembly with an ordered list of (column, operator, value)
//! triples. Column names are `&'static str` supplied by repository code;
//! user input only ever travels through bind values.

/// A value bound to a filter placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

/// Comparison operator for a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `column = ?`
    Eq,
    /// `column >= ?`
    Gte,
    /// `column <= ?`
    Lte,
    /// `LOWER(column) LIKE LOWER(?)` - case-insensitive on both backends
    Like,
}

#[derive(Debug, Clone)]
struct Filter {
    column: &'static str,
    op: FilterOp,
    value: FilterValue,
}

/// An ordered set of filters compiled to parameterized SQL
///
/// The clause text uses `?` placeholders, which both SQLite and MySQL
/// accept, and the bind order is exactly the push order. The same set is
/// reused for the count query and the data query so both see identical
/// bindings.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter on an integer column
    pub fn eq_int(mut self, column: &'static str, value: i64) -> Self {
        self.filters.push(Filter {
            column,
            op: FilterOp::Eq,
            value: FilterValue::Int(value),
        });
        self
    }

    /// Add a `>=` filter on a text column (dates compare correctly as
    /// ISO-8601 strings)
    pub fn gte_text(mut self, column: &'static str, value: String) -> Self {
        self.filters.push(Filter {
            column,
            op: FilterOp::Gte,
            value: FilterValue::Text(value),
        });
        self
    }

    /// Add a `<=` filter on a text column
    pub fn lte_text(mut self, column: &'static str, value: String) -> Self {
        self.filters.push(Filter {
            column,
            op: FilterOp::Lte,
            value: FilterValue::Text(value),
        });
        self
    }

    /// Add a case-insensitive substring filter; the `%` wildcards are
    /// added here so callers pass the raw term
    pub fn contains(mut self, column: &'static str, term: &str) -> Self {
        self.filters.push(Filter {
            column,
            op: FilterOp::Like,
            value: FilterValue::Text(format!("%{}%", term)),
        });
        self
    }

    /// Whether any filter is present
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of bind values the clause expects
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Compile the WHERE clause, including the leading ` WHERE `
    ///
    /// Returns an empty string when no filters are present, so the result
    /// can be appended to `SELECT ... FROM view` unconditionally.
    pub fn where_clause(&self) -> String {
        if self.filters.is_empty() {
            return String::new();
        }

        let mut clause = String::from(" WHERE ");
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                clause.push_str(" AND ");
            }
            match filter.op {
                FilterOp::Eq => {
                    clause.push_str(filter.column);
                    clause.push_str(" = ?");
                }
                FilterOp::Gte => {
                    clause.push_str(filter.column);
                    clause.push_str(" >= ?");
                }
                FilterOp::Lte => {
                    clause.push_str(filter.column);
                    clause.push_str(" <= ?");
                }
                FilterOp::Like => {
                    clause.push_str("LOWER(");
                    clause.push_str(filter.column);
                    clause.push_str(") LIKE LOWER(?)");
                }
            }
        }
        clause
    }

    /// Bind values in push order
    pub fn values(&self) -> impl Iterator<Item = &FilterValue> {
        self.filters.iter().map(|f| &f.value)
    }
}
