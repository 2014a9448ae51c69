use rusqlite::Row;

/// Builds a model from a query row, looking columns up by name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
