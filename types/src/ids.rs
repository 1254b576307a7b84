use std::fmt;

/// One-based table identifier. Tables are displayed as "Mesa N".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TableId(usize);

impl TableId {
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// The user-facing label for this table.
    #[must_use]
    pub fn label(self) -> String {
        format!("Mesa {}", self.0)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
