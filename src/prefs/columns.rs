//! Column visibility state for the rankings table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every column the table can show, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Rank,
    Player,
    Team,
    Pos,
    Score,
    Per,
    Ws,
    Ws48,
    Bpm,
    Vorp,
    Gp,
    Min,
    DeltaLy,
    Trend,
    Qualified,
    PerRank,
    WsRank,
    Ws48Rank,
    BpmRank,
    VorpRank,
}

impl ColumnKey {
    pub const ALL: [ColumnKey; 20] = [
        ColumnKey::Rank,
        ColumnKey::Player,
        ColumnKey::Team,
        ColumnKey::Pos,
        ColumnKey::Score,
        ColumnKey::Per,
        ColumnKey::Ws,
        ColumnKey::Ws48,
        ColumnKey::Bpm,
        ColumnKey::Vorp,
        ColumnKey::Gp,
        ColumnKey::Min,
        ColumnKey::DeltaLy,
        ColumnKey::Trend,
        ColumnKey::Qualified,
        ColumnKey::PerRank,
        ColumnKey::WsRank,
        ColumnKey::Ws48Rank,
        ColumnKey::BpmRank,
        ColumnKey::VorpRank,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::Rank => "Rank",
            ColumnKey::Player => "Player",
            ColumnKey::Team => "Team",
            ColumnKey::Pos => "Pos",
            ColumnKey::Score => "Score",
            ColumnKey::Per => "PER",
            ColumnKey::Ws => "WS",
            ColumnKey::Ws48 => "WS/48",
            ColumnKey::Bpm => "BPM",
            ColumnKey::Vorp => "VORP",
            ColumnKey::Gp => "GP",
            ColumnKey::Min => "MIN",
            ColumnKey::DeltaLy => "Δ LY",
            ColumnKey::Trend => "Trend",
            ColumnKey::Qualified => "Qual",
            ColumnKey::PerRank => "PER Rk",
            ColumnKey::WsRank => "WS Rk",
            ColumnKey::Ws48Rank => "WS/48 Rk",
            ColumnKey::BpmRank => "BPM Rk",
            ColumnKey::VorpRank => "VORP Rk",
        }
    }

    /// Rank and player identity are always visible and non-togglable.
    pub fn is_locked(&self) -> bool {
        matches!(self, ColumnKey::Rank | ColumnKey::Player)
    }

    fn default_visible(&self) -> bool {
        matches!(
            self,
            ColumnKey::Rank
                | ColumnKey::Player
                | ColumnKey::Team
                | ColumnKey::Pos
                | ColumnKey::Score
                | ColumnKey::Per
                | ColumnKey::Ws48
                | ColumnKey::Bpm
                | ColumnKey::Vorp
                | ColumnKey::Gp
                | ColumnKey::Min
                | ColumnKey::DeltaLy
        )
    }
}

/// Mapping from column key to visibility. Toggles replace the whole
/// mapping; the caller persists the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    visible: BTreeMap<ColumnKey, bool>,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            visible: ColumnKey::ALL
                .iter()
                .map(|k| (*k, k.default_visible()))
                .collect(),
        }
    }
}

impl ColumnSet {
    /// Keys missing from persisted data fall back to their defaults.
    pub fn is_visible(&self, key: ColumnKey) -> bool {
        self.visible
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_visible())
    }

    /// A new set with one column flipped. Locked columns are a no-op.
    pub fn toggled(&self, key: ColumnKey) -> ColumnSet {
        if key.is_locked() {
            return self.clone();
        }
        let mut next = self.clone();
        next.visible.insert(key, !self.is_visible(key));
        next
    }

    /// Visible columns in display order.
    pub fn visible_columns(&self) -> Vec<ColumnKey> {
        ColumnKey::ALL
            .iter()
            .copied()
            .filter(|k| self.is_visible(*k))
            .collect()
    }
}
