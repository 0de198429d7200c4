use super::Error;

/// A relation or junction-table entry names a table the model does not have.
///
/// The introspection input is inconsistent when this happens, so the run is
/// aborted rather than producing a partial relation graph.
#[derive(Debug)]
pub(super) struct MissingTable {
    table: Box<str>,
}

impl std::error::Error for MissingTable {}

impl core::fmt::Display for MissingTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` not found in schema", self.table)
    }
}

impl Error {
    pub fn missing_table(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTable(MissingTable {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a missing table
    /// error.
    pub fn is_missing_table(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingTable(_)))
    }
}
