use colored::{ColoredString, Colorize};

/// Indent applied to every entry line inside a status section
const ENTRY_INDENT: &str = "  ";

/// How a staged entry differs from the HEAD tree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IndexChangeType {
    #[default]
    None,
    Added,
    Modified,
    Deleted,
}

impl From<&IndexChangeType> for &str {
    fn from(change: &IndexChangeType) -> Self {
        match change {
            IndexChangeType::None => "",
            IndexChangeType::Added => "new file:   ",
            IndexChangeType::Modified => "modified:   ",
            IndexChangeType::Deleted => "deleted:    ",
        }
    }
}

/// How the working tree differs from a staged entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WorkspaceChangeType {
    #[default]
    None,
    Modified,
    Deleted,
}

impl From<&WorkspaceChangeType> for &str {
    fn from(change: &WorkspaceChangeType) -> Self {
        match change {
            WorkspaceChangeType::None => "",
            WorkspaceChangeType::Modified => "modified:   ",
            WorkspaceChangeType::Deleted => "deleted:    ",
        }
    }
}

impl IndexChangeType {
    /// Staged changes render green, like the section they appear in
    fn colorize(&self) -> ColoredString {
        let label: &str = self.into();
        label.green()
    }
}

impl WorkspaceChangeType {
    /// Unstaged changes render red
    fn colorize(&self) -> ColoredString {
        let label: &str = self.into();
        label.red()
    }
}

impl std::fmt::Display for IndexChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ENTRY_INDENT, self.colorize())
    }
}

impl std::fmt::Display for WorkspaceChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ENTRY_INDENT, self.colorize())
    }
}
