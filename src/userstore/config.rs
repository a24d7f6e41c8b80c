use crate::error::{Result, StoreError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The four operations the store understands, named as they appear on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }

    pub fn all() -> &'static [Operation] {
        &[
            Operation::Add,
            Operation::List,
            Operation::FindById,
            Operation::Remove,
        ]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::all()
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| StoreError::UnknownOperation(s.to_string()))
    }
}

/// Everything a single invocation needs, built once at process entry.
///
/// Empty strings are treated the same as absent values, so callers can pass
/// raw flag values straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub operation: Option<String>,
    pub id: Option<String>,
    pub item: Option<String>,
    pub file_name: Option<String>,
}

impl Arguments {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// The backing file path, or [`StoreError::MissingFileName`].
    pub fn file_name(&self) -> Result<&Path> {
        non_empty(&self.file_name)
            .map(Path::new)
            .ok_or(StoreError::MissingFileName)
    }

    /// The raw operation name, or [`StoreError::MissingOperation`].
    ///
    /// Parsing into an [`Operation`] is left to the caller so that unknown names
    /// are reported only once the backing file has been opened.
    pub fn operation_name(&self) -> Result<&str> {
        non_empty(&self.operation).ok_or(StoreError::MissingOperation)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn item(&self) -> &str {
        self.item.as_deref().unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation_name() {
        for op in Operation::all() {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), *op);
        }
    }

    #[test]
    fn operation_names_are_case_sensitive() {
        let err = "findbyid".parse::<Operation>().unwrap_err();
        assert!(matches!(err, StoreError::UnknownOperation(name) if name == "findbyid"));
    }

    #[test]
    fn missing_file_name() {
        let args = Arguments::new("list");
        assert!(matches!(args.file_name(), Err(StoreError::MissingFileName)));
    }

    #[test]
    fn empty_file_name_counts_as_missing() {
        let args = Arguments::new("list").with_file_name("");
        assert!(matches!(args.file_name(), Err(StoreError::MissingFileName)));
    }

    #[test]
    fn missing_operation() {
        let args = Arguments::default().with_file_name("users.json");
        assert!(matches!(
            args.operation_name(),
            Err(StoreError::MissingOperation)
        ));
    }

    #[test]
    fn absent_id_and_item_read_as_empty() {
        let args = Arguments::new("add");
        assert_eq!(args.id(), "");
        assert_eq!(args.item(), "");
    }

    #[test]
    fn builder_sets_fields() {
        let args = Arguments::new("remove")
            .with_id("3")
            .with_file_name("users.json");
        assert_eq!(args.operation_name().unwrap(), "remove");
        assert_eq!(args.id(), "3");
        assert_eq!(args.file_name().unwrap(), Path::new("users.json"));
    }
}
