//! Named filter set over the fixed statistical fields.

use serde::{Deserialize, Serialize};

use crate::domain::StatField;
use crate::filters::condition::NumericCondition;

/// One optional condition per stat field plus the qualified-only flag.
///
/// Treated as an immutable value: every edit replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingsFilters {
    pub gp: Option<NumericCondition>,
    pub min: Option<NumericCondition>,
    pub score: Option<NumericCondition>,
    pub ws48: Option<NumericCondition>,
    pub bpm: Option<NumericCondition>,
    pub per: Option<NumericCondition>,
    pub ws: Option<NumericCondition>,
    pub vorp: Option<NumericCondition>,
    /// Only show players meeting the qualification threshold.
    pub qualified_only: bool,
}

impl Default for RankingsFilters {
    fn default() -> Self {
        Self {
            gp: None,
            min: None,
            score: None,
            ws48: None,
            bpm: None,
            per: None,
            ws: None,
            vorp: None,
            qualified_only: true,
        }
    }
}

impl RankingsFilters {
    pub fn condition(&self, field: StatField) -> Option<&NumericCondition> {
        match field {
            StatField::Gp => self.gp.as_ref(),
            StatField::Min => self.min.as_ref(),
            StatField::Score => self.score.as_ref(),
            StatField::Ws48 => self.ws48.as_ref(),
            StatField::Bpm => self.bpm.as_ref(),
            StatField::Per => self.per.as_ref(),
            StatField::Ws => self.ws.as_ref(),
            StatField::Vorp => self.vorp.as_ref(),
        }
    }

    pub fn set_condition(&mut self, field: StatField, cond: Option<NumericCondition>) {
        match field {
            StatField::Gp => self.gp = cond,
            StatField::Min => self.min = cond,
            StatField::Score => self.score = cond,
            StatField::Ws48 => self.ws48 = cond,
            StatField::Bpm => self.bpm = cond,
            StatField::Per => self.per = cond,
            StatField::Ws => self.ws = cond,
            StatField::Vorp => self.vorp = cond,
        }
    }

    /// Present conditions in field order.
    pub fn conditions(&self) -> impl Iterator<Item = (StatField, &NumericCondition)> {
        StatField::ALL
            .iter()
            .filter_map(move |f| self.condition(*f).map(|c| (*f, c)))
    }

    /// Anything deviating from the default (all-absent, qualified-only)?
    pub fn has_active(&self) -> bool {
        !self.qualified_only || self.conditions().next().is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::condition::Comparator;

    #[test]
    fn defaults_to_qualified_only() {
        let f = RankingsFilters::default();
        assert!(f.qualified_only);
        assert!(!f.has_active());
        assert_eq!(f.conditions().count(), 0);
    }

    #[test]
    fn set_and_get_by_field() {
        let mut f = RankingsFilters::default();
        let cond = NumericCondition::new(Comparator::Gte, 1000.0);
        f.set_condition(StatField::Min, Some(cond));

        assert_eq!(f.condition(StatField::Min), Some(&cond));
        assert_eq!(f.condition(StatField::Gp), None);
        assert!(f.has_active());

        let collected: Vec<_> = f.conditions().map(|(field, _)| field).collect();
        assert_eq!(collected, vec![StatField::Min]);

        f.set_condition(StatField::Min, None);
        assert!(!f.has_active());
    }

    #[test]
    fn disabling_qualified_only_counts_as_active() {
        let f = RankingsFilters {
            qualified_only: false,
            ..Default::default()
        };
        assert!(f.has_active());
    }
}
