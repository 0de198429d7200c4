use super::Error;

/// A relation entry references a foreign-key column the table does not have.
#[derive(Debug)]
pub(super) struct MissingColumn {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for MissingColumn {}

impl core::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` not found in table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumn {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a missing column
    /// error.
    pub fn is_missing_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingColumn(_)))
    }
}
