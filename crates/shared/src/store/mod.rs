//! Read/write contract with the hosted tabular store.
//!
//! The store speaks a PostgREST-style dialect: equality filters and a
//! single-column ordering are encoded into the query string and executed
//! server side. This module only *describes* queries; the actual round
//! trip lives in [`client`] and is one fetch per call, no retries, no
//! caching.

mod config;
pub use config::*;

mod error;
pub use error::*;

#[cfg(feature = "wasm")]
mod client;
#[cfg(feature = "wasm")]
pub use client::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped in filter values before they land in a query string.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// The five logical tables the site touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Programs,
    Workouts,
    DietPlans,
    Testimonials,
    ContactSubmissions,
}

impl Table {
    /// Wire name, exactly as the store schema spells it.
    pub fn name(self) -> &'static str {
        match self {
            Table::Programs => "programs",
            Table::Workouts => "workouts",
            Table::DietPlans => "diet_plans",
            Table::Testimonials => "testimonials",
            Table::ContactSubmissions => "contact_submissions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn wire(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// An exact-match filter value. Equality is the only predicate the site
/// ever sends.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    Text(String),
}

impl FilterValue {
    fn wire(&self) -> String {
        match self {
            FilterValue::Bool(value) => value.to_string(),
            FilterValue::Text(value) => {
                utf8_percent_encode(value, QUERY_VALUE).to_string()
            }
        }
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

/// Description of one read: a table, zero or more equality filters and at
/// most one ordering. Rendered to the store's query-string dialect by
/// [`Select::query_string`].
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: Table,
    filters: Vec<(&'static str, FilterValue)>,
    order: Option<(&'static str, Direction)>,
}

impl Select {
    pub fn from_table(table: Table) -> Self {
        Select {
            table,
            filters: Vec::new(),
            order: None,
        }
    }

    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    /// Order by a single column. Later calls replace earlier ones.
    pub fn order(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn filters(&self) -> &[(&'static str, FilterValue)] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<(&'static str, Direction)> {
        self.order
    }

    /// `select=*&col=eq.value&order=col.desc`
    pub fn query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];
        for (column, value) in &self.filters {
            parts.push(format!("{column}=eq.{}", value.wire()));
        }
        if let Some((column, direction)) = self.order {
            parts.push(format!("order={column}.{}", direction.wire()));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::*;

    /// In-memory stand-in for the hosted store. Applies the same equality
    /// filters and single-column ordering the real store executes server
    /// side, so the contract in `Select` can be checked without a network.
    fn run_query(select: &Select, rows: &[Value]) -> Vec<Value> {
        let mut out: Vec<Value> = rows
            .iter()
            .filter(|row| {
                select.filters().iter().all(|(column, value)| match value {
                    FilterValue::Bool(b) => row[*column].as_bool() == Some(*b),
                    FilterValue::Text(t) => row[*column].as_str() == Some(t.as_str()),
                })
            })
            .cloned()
            .collect();

        if let Some((column, direction)) = select.ordering() {
            // RFC 3339 timestamps sort correctly as strings
            out.sort_by(|a, b| {
                let a = a[column].as_str().unwrap_or("");
                let b = b[column].as_str().unwrap_or("");
                match direction {
                    Direction::Ascending => a.cmp(b),
                    Direction::Descending => b.cmp(a),
                }
            });
        }
        out
    }

    fn program_rows() -> Vec<Value> {
        vec![
            json!({ "id": "1", "is_active": true, "created_at": "2024-02-01T00:00:00Z" }),
            json!({ "id": "2", "is_active": true, "created_at": "2024-01-01T00:00:00Z" }),
            json!({ "id": "3", "is_active": false, "created_at": "2024-03-01T00:00:00Z" }),
        ]
    }

    #[test]
    fn test_table_wire_names() {
        assert_eq!(Table::Programs.name(), "programs");
        assert_eq!(Table::Workouts.name(), "workouts");
        assert_eq!(Table::DietPlans.name(), "diet_plans");
        assert_eq!(Table::Testimonials.name(), "testimonials");
        assert_eq!(Table::ContactSubmissions.name(), "contact_submissions");
    }

    #[test]
    fn test_query_string_with_filter_and_order() {
        let select = Select::from_table(Table::Programs)
            .eq("is_active", true)
            .order("created_at", Direction::Descending);
        assert_eq!(
            select.query_string(),
            "select=*&is_active=eq.true&order=created_at.desc"
        );
    }

    #[test]
    fn test_query_string_without_filters() {
        let select = Select::from_table(Table::Workouts).order("created_at", Direction::Descending);
        assert_eq!(select.query_string(), "select=*&order=created_at.desc");
    }

    #[test]
    fn test_text_filter_values_are_percent_encoded() {
        let select = Select::from_table(Table::Programs).eq("category", "home training & more");
        assert_eq!(
            select.query_string(),
            "select=*&category=eq.home%20training%20%26%20more"
        );
    }

    #[test]
    fn test_filtered_rows_all_match_requested_value() {
        let select = Select::from_table(Table::Programs).eq("is_active", true);
        let rows = run_query(&select, &program_rows());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row["is_active"] == json!(true)));
    }

    #[test]
    fn test_ordered_rows_descend_by_created_at() {
        let select = Select::from_table(Table::Programs)
            .eq("is_active", true)
            .order("created_at", Direction::Descending);
        let rows = run_query(&select, &program_rows());

        assert_eq!(rows[0]["id"], json!("1"));
        assert_eq!(rows[1]["id"], json!("2"));
        for pair in rows.windows(2) {
            let a = pair[0]["created_at"].as_str().unwrap();
            let b = pair[1]["created_at"].as_str().unwrap();
            assert!(a >= b, "{a} should not come after {b}");
        }
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let select = Select::from_table(Table::Testimonials).eq("is_featured", true);
        let rows = run_query(&select, &[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_later_order_calls_replace_earlier_ones() {
        let select = Select::from_table(Table::Programs)
            .order("price", Direction::Ascending)
            .order("created_at", Direction::Descending);
        assert_eq!(select.ordering(), Some(("created_at", Direction::Descending)));
    }
}
