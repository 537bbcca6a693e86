//! A single `INSERT` statement.

use std::fmt;

use crate::error::SqlError;
use crate::literal::SqlLiteral;
use crate::tables::Table;

/// `INSERT INTO <table> (<columns>) VALUES (<values>);`
///
/// Construction checks the value count against the column list and rejects
/// text a PostgreSQL literal cannot carry, so a built statement always renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    table: Table,
    values: Vec<SqlLiteral>,
}

impl InsertStatement {
    /// # Errors
    ///
    /// Returns [`SqlError::ColumnMismatch`] if `values` does not line up with
    /// the table's columns, or [`SqlError::MalformedLiteral`] if a text value
    /// contains a NUL byte.
    pub fn new(table: Table, values: Vec<SqlLiteral>) -> Result<Self, SqlError> {
        if values.len() != table.columns.len() {
            return Err(SqlError::ColumnMismatch {
                table: table.name,
                columns: table.columns.len(),
                values: values.len(),
            });
        }
        if let Some((column, _)) = table
            .columns
            .iter()
            .zip(&values)
            .find(|(_, value)| value.contains_nul())
        {
            return Err(SqlError::MalformedLiteral {
                table: table.name,
                column: *column,
                reason: "text contains a NUL byte".to_string(),
            });
        }
        Ok(Self { table, values })
    }

    #[must_use]
    pub const fn table(&self) -> Table {
        self.table
    }

    /// The value bound to `column`, if the table has that column.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&SqlLiteral> {
        self.table
            .column_index(column)
            .and_then(|idx| self.values.get(idx))
    }

    /// The statement as two lines: the column list, then the indented tuple.
    #[must_use]
    pub fn lines(&self) -> [String; 2] {
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        [
            format!(
                "INSERT INTO {} ({}) VALUES",
                self.table.name,
                self.table.columns.join(", ")
            ),
            format!("  ({});", values.join(", ")),
        ]
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [head, tuple] = self.lines();
        write!(f, "{head}\n{tuple}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{DASHBOARD_STAGES, GLOSSARY_TERMS};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_column_list_and_tuple() {
        let stmt = InsertStatement::new(
            DASHBOARD_STAGES,
            vec![
                SqlLiteral::text("stg-1"),
                SqlLiteral::text("Подготовка"),
                SqlLiteral::text("Настрой свой рабочий процесс"),
                SqlLiteral::from(1),
            ],
        )
        .unwrap();

        assert_eq!(
            stmt.to_string(),
            "INSERT INTO dashboard_stages (id, title, subtitle, sort_order) VALUES\n  \
             ('stg-1', 'Подготовка', 'Настрой свой рабочий процесс', 1);"
        );
        assert_eq!(stmt.value("sort_order"), Some(&SqlLiteral::Integer(1)));
        assert_eq!(stmt.value("missing"), None);
    }

    #[test]
    fn rejects_column_mismatch() {
        let err = InsertStatement::new(DASHBOARD_STAGES, vec![SqlLiteral::Null]).unwrap_err();
        assert!(matches!(
            err,
            SqlError::ColumnMismatch {
                table: "dashboard_stages",
                columns: 4,
                values: 1
            }
        ));
    }

    #[test]
    fn rejects_nul_byte_and_names_column() {
        let err = InsertStatement::new(
            GLOSSARY_TERMS,
            vec![
                SqlLiteral::text("id"),
                SqlLiteral::text("API"),
                SqlLiteral::Null,
                SqlLiteral::text("bad\0definition"),
                SqlLiteral::text("API"),
            ],
        )
        .unwrap_err();

        match err {
            SqlError::MalformedLiteral { table, column, .. } => {
                assert_eq!(table, "glossary_terms");
                assert_eq!(column, "definition");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
