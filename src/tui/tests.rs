#[cfg(test)]
mod tests {
    use crate::domain::{RankingsResponse, StatField};
    use crate::filters::{Comparator, NumericCondition};
    use crate::prefs::ColumnKey;
    use crate::tui::app::{parse_filter_command, FilterEdit};
    use crate::tui::DashboardApp;

    fn demo_app() -> DashboardApp {
        DashboardApp::new(vec![2025, 2024, 2023], 2025).with_demo_data()
    }

    #[test]
    fn test_app_new() {
        let app = DashboardApp::new(vec![2025, 2024], 2024);
        assert!(app.is_running());
        assert!(app.players.is_empty());
        assert_eq!(app.season(), 2024);
        assert!(!app.show_help);
        assert!(app.filters.qualified_only);
    }

    #[test]
    fn test_quit() {
        let mut app = demo_app();
        assert!(app.is_running());
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_season_switching_wraps() {
        let mut app = DashboardApp::new(vec![2025, 2024, 2023], 2025);
        assert_eq!(app.season(), 2025);

        app.next_season();
        assert_eq!(app.season(), 2024);

        app.prev_season();
        assert_eq!(app.season(), 2025);

        // Wrap around
        app.prev_season();
        assert_eq!(app.season(), 2023);
        app.next_season();
        assert_eq!(app.season(), 2025);
    }

    #[test]
    fn test_scroll_clamps_to_filtered_rows() {
        let mut app = demo_app();
        assert_eq!(app.filtered.len(), 5);

        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.scroll_offset, 2);

        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, 4);

        app.scroll_to_top();
        assert_eq!(app.scroll_offset, 0);
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = demo_app();
        let first = app.begin_fetch();
        let second = app.begin_fetch();
        assert!(second > first);

        // Response for the superseded fetch must not land.
        app.set_rankings(
            first,
            RankingsResponse {
                players: Vec::new(),
                total_count: 0,
                season: 2024,
                last_updated: None,
            },
        );
        assert_eq!(app.players.len(), 5);
        assert!(app.loading);

        // The current one does.
        app.set_rankings(
            second,
            RankingsResponse {
                players: Vec::new(),
                total_count: 0,
                season: 2024,
                last_updated: None,
            },
        );
        assert!(app.players.is_empty());
        assert!(!app.loading);
    }

    #[test]
    fn test_stale_error_is_discarded() {
        let mut app = demo_app();
        let first = app.begin_fetch();
        let _second = app.begin_fetch();

        app.fail_fetch(first, "connection refused".into());
        assert!(app.error.is_none());
        assert!(app.loading);
    }

    #[test]
    fn test_search_narrows_and_restores() {
        let mut app = demo_app();
        app.search = "okc".into();
        app.apply_filters();
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.filtered[0].player_name, "Shai Gilgeous-Alexander");

        app.search.clear();
        app.apply_filters();
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_commit_filter_input() {
        let mut app = demo_app();
        app.filter_input = "gp >= 65".into();
        app.commit_filter_input();
        assert!(app.filter_input.is_empty());
        assert!(!app.filter_mode);
        assert_eq!(app.filtered.len(), 3);

        app.filter_input = "gp clear".into();
        app.commit_filter_input();
        assert_eq!(app.filtered.len(), 5);
    }

    #[test]
    fn test_parse_filter_command() {
        assert_eq!(
            parse_filter_command("min >= 2300"),
            FilterEdit::Set(StatField::Min, NumericCondition::new(Comparator::Gte, 2300.0)),
        );
        assert_eq!(
            parse_filter_command("per between 25 30"),
            FilterEdit::Set(
                StatField::Per,
                NumericCondition::between(25.0, 30.0),
            ),
        );
        assert_eq!(parse_filter_command("bpm -"), FilterEdit::Clear(StatField::Bpm));
        assert_eq!(parse_filter_command("clear"), FilterEdit::ClearAll);
        assert_eq!(parse_filter_command("qualified off"), FilterEdit::Qualified(false));
        assert_eq!(parse_filter_command("qualified on"), FilterEdit::Qualified(true));
        // No operands means no condition, which clears the field.
        assert_eq!(parse_filter_command("vorp > "), FilterEdit::Clear(StatField::Vorp));
        assert_eq!(parse_filter_command("steals > 2"), FilterEdit::None);
        assert_eq!(parse_filter_command(""), FilterEdit::None);
    }

    #[test]
    fn test_picker_toggle_skips_locked_columns() {
        let mut app = demo_app();
        app.open_column_picker();
        // Index 0 is the rank column, which can never be hidden.
        assert_eq!(ColumnKey::ALL[0], ColumnKey::Rank);
        assert!(!app.picker_toggle());

        // Move to a toggleable column and flip it twice.
        while ColumnKey::ALL[app.column_picker.unwrap()].is_locked() {
            app.picker_down();
        }
        let key = ColumnKey::ALL[app.column_picker.unwrap()];
        let before = app.columns.is_visible(key);
        assert!(app.picker_toggle());
        assert_eq!(app.columns.is_visible(key), !before);
        assert!(app.picker_toggle());
        assert_eq!(app.columns.is_visible(key), before);
    }

    #[test]
    fn test_toggle_qualified_and_clear() {
        let mut app = demo_app();
        app.toggle_qualified();
        assert!(!app.filters.qualified_only);

        app.filter_input = "ws48 > 0.25".into();
        app.commit_filter_input();
        assert_eq!(app.filtered.len(), 2);

        app.clear_filters();
        assert!(!app.filters.has_active());
        assert_eq!(app.filtered.len(), 5);
    }
}
