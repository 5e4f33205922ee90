//! Persisted display preferences: column visibility and table density.

pub mod columns;
pub mod store;

pub use columns::{ColumnKey, ColumnSet};
pub use store::PrefsStore;

/// Table row density preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Comfortable => "comfortable",
            Density::Compact => "compact",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "comfortable" => Some(Density::Comfortable),
            "compact" => Some(Density::Compact),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Density::Comfortable => Density::Compact,
            Density::Compact => Density::Comfortable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_keys_round_trip() {
        assert_eq!(Density::from_key("compact"), Some(Density::Compact));
        assert_eq!(
            Density::from_key(Density::Comfortable.as_str()),
            Some(Density::Comfortable)
        );
        assert_eq!(Density::from_key("cozy"), None);
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(Density::Comfortable.toggled(), Density::Compact);
        assert_eq!(Density::Compact.toggled(), Density::Comfortable);
    }
}
