//! Three-band categories.

use std::fmt;

/// Band a quantile falls into.
///
/// The discriminants are the stable integer codes written to output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// Quantile strictly between band edges.
    Unclassified = 0,
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Category {
    /// Integer code of this category.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Category::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unclassified),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unclassified => "unclassified",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}
