//! Filterable statistical fields and their accessors.

use super::player::Player;

/// The fixed set of player stats a numeric filter can target.
///
/// `key()` doubles as the query-string prefix for the filter codec
/// (`gp_op`, `gp_val`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Gp,
    Min,
    Score,
    Ws48,
    Bpm,
    Per,
    Ws,
    Vorp,
}

impl StatField {
    pub const ALL: [StatField; 8] = [
        StatField::Gp,
        StatField::Min,
        StatField::Score,
        StatField::Ws48,
        StatField::Bpm,
        StatField::Per,
        StatField::Ws,
        StatField::Vorp,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StatField::Gp => "gp",
            StatField::Min => "min",
            StatField::Score => "score",
            StatField::Ws48 => "ws48",
            StatField::Bpm => "bpm",
            StatField::Per => "per",
            StatField::Ws => "ws",
            StatField::Vorp => "vorp",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatField::Gp => "GP",
            StatField::Min => "MIN",
            StatField::Score => "Score",
            StatField::Ws48 => "WS/48",
            StatField::Bpm => "BPM",
            StatField::Per => "PER",
            StatField::Ws => "WS",
            StatField::Vorp => "VORP",
        }
    }

    /// Read this field off a player record. `None` means the backend did
    /// not supply the value; a present condition never matches it.
    pub fn value(&self, player: &Player) -> Option<f64> {
        match self {
            StatField::Gp => player.games.map(f64::from),
            StatField::Min => player.minutes.map(f64::from),
            StatField::Score => player.composite_score,
            StatField::Ws48 => player.ws48,
            StatField::Bpm => player.bpm,
            StatField::Per => player.per,
            StatField::Ws => player.ws,
            StatField::Vorp => player.vorp,
        }
    }
}
