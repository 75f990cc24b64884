//! Task priority levels.

use std::fmt;

/// Priority of a task, `P0` being the most urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Critical.
    P0,
    /// High.
    P1,
    /// Normal.
    P2,
    /// Low, and the default when no marker is present.
    #[default]
    P3,
}

impl Priority {
    /// Priorities that have an explicit content marker, in precedence order.
    pub const MARKED: [Self; 3] = [Self::P0, Self::P1, Self::P2];

    /// Short name, e.g. `P1`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }

    /// Literal text that marks this priority inside task content.
    #[must_use]
    pub fn marker(self) -> String {
        format!("Priority: {}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
