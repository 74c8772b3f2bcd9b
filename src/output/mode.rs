//! Which sinks receive each entry.

use std::fmt;

/// Three-bit set over {file, stderr, database}.
///
/// Valid values are `0..=6`; all three sinks together (7) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkMode(u8);

impl SinkMode {
    /// Nothing is written anywhere.
    pub const NONE: Self = Self(0);
    pub const FILE: Self = Self(1);
    pub const STDERR: Self = Self(2);
    pub const DATABASE: Self = Self(4);
    pub const FILE_STDERR: Self = Self(1 | 2);
    pub const FILE_DATABASE: Self = Self(1 | 4);
    pub const STDERR_DATABASE: Self = Self(2 | 4);

    /// `None` for 7 and anything wider than three bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= 6 { Some(Self(bits)) } else { None }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// `self` with the bits of `other` cleared.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Folds sink names (`file`, `stderr`, `database`/`db`) or a numeric
    /// mode into one value.
    ///
    /// # Errors
    /// [`crate::Error::InvalidSinkMode`] for unknown names or mode 7.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, crate::Error> {
        let mut bits = 0_u8;
        for name in names {
            let name = name.as_ref().trim().to_lowercase();
            bits |= match name.as_str() {
                "" | "none" => 0,
                "file" => Self::FILE.0,
                "stderr" | "stdout" | "console" => Self::STDERR.0,
                "database" | "db" => Self::DATABASE.0,
                other => other
                    .parse::<u8>()
                    .ok()
                    .filter(|b| *b <= 7)
                    .ok_or_else(|| crate::Error::InvalidSinkMode(other.to_string()))?,
            };
        }
        Self::from_bits(bits).ok_or_else(|| crate::Error::InvalidSinkMode(bits.to_string()))
    }
}

impl Default for SinkMode {
    fn default() -> Self {
        Self::FILE
    }
}

impl fmt::Display for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::FILE, "file"),
            (Self::STDERR, "stderr"),
            (Self::DATABASE, "database"),
        ]
        .into_iter()
        .filter(|(bit, _)| self.contains(*bit))
        .map(|(_, name)| name)
        .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}
