//! In-memory filter/search evaluation over a fetched player list.

use crate::domain::{Player, StatField};
use crate::filters::condition::evaluate;
use crate::filters::set::RankingsFilters;

/// Apply free-text search plus the filter set to a player list.
///
/// Stable and non-mutating: the result preserves input order and the
/// input slice is untouched. Pure function; callers re-invoke on every
/// input change and memoize if they need to.
pub fn filter_players<'a>(
    players: &'a [Player],
    search: &str,
    filters: &RankingsFilters,
) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| matches(p, search, filters))
        .collect()
}

/// Does one player pass the search term and every present condition?
pub fn matches(player: &Player, search: &str, filters: &RankingsFilters) -> bool {
    if !matches_search(player, search) {
        return false;
    }
    if filters.qualified_only && !player.qualified {
        return false;
    }
    StatField::ALL
        .iter()
        .all(|field| match filters.condition(*field) {
            Some(cond) => evaluate(field.value(player), Some(cond)),
            None => true,
        })
}

// Case-insensitive literal substring match on name, team, or position.
// No abbreviation logic: "lak" does not match "LAL".
fn matches_search(player: &Player, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    player.player_name.to_lowercase().contains(&needle)
        || player.team.to_lowercase().contains(&needle)
        || player.position.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::condition::{Comparator, NumericCondition};
    use crate::filters::query::{from_query_string, to_query_string};

    fn player(name: &str, team: &str, qualified: bool, minutes: u32) -> Player {
        Player {
            rank: 1,
            player_id: 0,
            player_name: name.to_string(),
            team: team.to_string(),
            position: "G".to_string(),
            composite_score: Some(50.0),
            per: Some(15.0),
            per_rank: None,
            ws: Some(3.0),
            ws_rank: None,
            ws48: Some(0.100),
            ws48_rank: None,
            bpm: Some(0.0),
            bpm_rank: None,
            vorp: Some(1.0),
            vorp_rank: None,
            games: Some(60),
            minutes: Some(minutes),
            qualified,
            trend_1d: None,
            trend_7d: None,
            trend_14d: None,
            rank_change: 0,
            previous_rank: None,
            trend_direction: Default::default(),
        }
    }

    #[test]
    fn qualification_and_minutes_gate_together() {
        let players = vec![
            player("A", "DEN", true, 500),
            player("B", "BOS", false, 2000),
        ];
        let mut filters = RankingsFilters::default();
        filters.set_condition(
            StatField::Min,
            Some(NumericCondition::new(Comparator::Gte, 1000.0)),
        );

        // B fails qualification, A fails minutes.
        assert!(filter_players(&players, "", &filters).is_empty());
    }

    #[test]
    fn qualified_only_false_admits_everyone() {
        let players = vec![
            player("A", "DEN", true, 500),
            player("B", "BOS", false, 2000),
        ];
        let filters = RankingsFilters {
            qualified_only: false,
            ..Default::default()
        };

        let out = filter_players(&players, "", &filters);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].player_name, "A");
        assert_eq!(out[1].player_name, "B");
    }

    #[test]
    fn search_is_case_insensitive_but_literal() {
        let players = vec![player("LeBron James", "LAL", true, 2000)];
        let filters = RankingsFilters::default();

        assert_eq!(filter_players(&players, "lebron", &filters).len(), 1);
        assert_eq!(filter_players(&players, "lal", &filters).len(), 1);
        // "lak" is not a substring of "LAL"; no abbreviation expansion.
        assert!(filter_players(&players, "lak", &filters).is_empty());
    }

    #[test]
    fn search_covers_position() {
        let players = vec![player("Someone", "MIA", true, 2000)];
        let filters = RankingsFilters::default();
        assert_eq!(filter_players(&players, "g", &filters).len(), 1);
    }

    #[test]
    fn no_constraints_returns_input_in_order() {
        let players = vec![
            player("A", "DEN", true, 100),
            player("B", "BOS", true, 200),
            player("C", "MIA", true, 300),
        ];
        let filters = RankingsFilters::default();

        let once: Vec<String> = filter_players(&players, "", &filters)
            .iter()
            .map(|p| p.player_name.clone())
            .collect();
        assert_eq!(once, vec!["A", "B", "C"]);

        // Idempotent: same inputs, same output.
        let twice: Vec<String> = filter_players(&players, "", &filters)
            .iter()
            .map(|p| p.player_name.clone())
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_stat_fails_a_present_condition() {
        let mut p = player("A", "DEN", true, 2000);
        p.bpm = None;
        let mut filters = RankingsFilters::default();
        filters.set_condition(
            StatField::Bpm,
            Some(NumericCondition::new(Comparator::Gte, -100.0)),
        );

        assert!(!matches(&p, "", &filters));
    }

    #[test]
    fn decoded_between_link_evaluates_order_normalized() {
        // Encode a reversed range, decode it, and evaluate gp = 7.
        let mut filters = RankingsFilters::default();
        filters.set_condition(StatField::Gp, Some(NumericCondition::between(10.0, 5.0)));

        let decoded = from_query_string(&to_query_string(&filters));
        let mut p = player("A", "DEN", true, 2000);
        p.games = Some(7);
        assert!(matches(&p, "", &decoded));

        p.games = Some(11);
        assert!(!matches(&p, "", &decoded));
    }
}
