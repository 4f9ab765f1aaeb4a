pub mod core;
pub mod interfaces;

#[cfg(test)]
mod markup_tests {
    use crate::core::markup::{
        race_progress, render_race_start_view, render_racer_cards, render_selection_view,
        render_track_cards, results_view,
    };
    use crate::core::markup::render_countdown;
    use raceclient::api::models::{CarPosition, Racer, Track};

    fn position(id: u32, driver_name: &str, segment: u32) -> CarPosition {
        CarPosition {
            id,
            driver_name: String::from(driver_name),
            segment,
        }
    }

    #[test]
    fn test_track_cards_loading_placeholder() {
        assert_eq!(render_track_cards(&[], None), "<h4>Loading Tracks...</h4>");
    }

    #[test]
    fn test_racer_cards_loading_placeholder() {
        assert_eq!(render_racer_cards(&[], None), "<h4>Loading Racers...</h4>");
    }

    #[test]
    fn test_track_cards_one_card_per_track() {
        let tracks = vec![
            Track {
                id: 1,
                name: String::from("Executive Park"),
            },
            Track {
                id: 2,
                name: String::from("Ancho Valley"),
            },
        ];
        let markup = render_track_cards(&tracks, None);

        assert_eq!(markup.matches("card track").count(), 2);
        assert!(markup.contains("<ul id=\"tracks\">"));
        assert!(markup.contains("id=\"1\""));
        assert!(markup.contains("Executive Park"));
        assert!(markup.contains("id=\"2\""));
        assert!(markup.contains("Ancho Valley"));
        assert!(!markup.contains("selected"));
    }

    #[test]
    fn test_track_cards_mark_selection() {
        let tracks = vec![
            Track {
                id: 1,
                name: String::from("Executive Park"),
            },
            Track {
                id: 2,
                name: String::from("Ancho Valley"),
            },
        ];
        let markup = render_track_cards(&tracks, Some(2));

        assert_eq!(markup.matches("selected").count(), 1);
        assert!(markup.contains("<h4 id=\"2\" class=\"card track selected\">"));
    }

    #[test]
    fn test_racer_cards_embed_id_and_name() {
        let racers = vec![Racer {
            id: 3,
            driver_name: String::from("Racer 3"),
        }];
        let markup = render_racer_cards(&racers, None);

        assert!(markup.contains("<ul id=\"racers\">"));
        assert!(markup.contains("class=\"card racer\" id=\"3\""));
        assert!(markup.contains("Racer 3"));
    }

    #[test]
    fn test_selection_view_contains_submit_control() {
        let tracks = vec![Track {
            id: 1,
            name: String::from("Executive Park"),
        }];
        let racers = vec![Racer {
            id: 3,
            driver_name: String::from("Racer 3"),
        }];
        let markup = render_selection_view(&tracks, &racers, Some(1), None);

        assert!(markup.contains("<section id=\"tracks\">"));
        assert!(markup.contains("<section id=\"racers\">"));
        assert!(markup.contains("<button id=\"submit-create-race\">"));
        assert!(markup.contains("class=\"card track selected\""));
    }

    #[test]
    fn test_countdown_shows_value() {
        let markup = render_countdown(2);
        assert!(markup.contains("<p id=\"big-numbers\">2</p>"));
    }

    #[test]
    fn test_race_start_view_contains_controls() {
        let markup = render_race_start_view("Executive Park", 3);

        assert!(markup.contains("Race: Executive Park"));
        assert!(markup.contains("<section id=\"leaderBoard\">"));
        assert!(markup.contains("<p id=\"big-numbers\">3</p>"));
        assert!(markup.contains("<button id=\"gas-peddle\">"));
    }

    #[test]
    fn test_race_progress_orders_by_descending_segment() {
        let positions = vec![
            position(1, "Racer 1", 50),
            position(2, "Racer 2", 80),
            position(3, "Racer 3", 65),
        ];
        let markup = race_progress(&positions, None);

        assert!(markup.contains("1 - Racer 2"));
        assert!(markup.contains("2 - Racer 3"));
        assert!(markup.contains("3 - Racer 1"));
    }

    #[test]
    fn test_race_progress_marks_player_once() {
        let positions = vec![position(1, "Racer 1", 50), position(2, "Racer 2", 80)];
        let markup = race_progress(&positions, Some(1));

        assert_eq!(markup.matches("(you)").count(), 1);
        assert!(markup.contains("Racer 1 (you)"));
    }

    #[test]
    fn test_race_progress_without_player_match() {
        let positions = vec![position(1, "Racer 1", 50)];
        let markup = race_progress(&positions, Some(99));

        assert!(!markup.contains("(you)"));
    }

    #[test]
    fn test_results_view_keeps_server_order() {
        let positions = vec![
            position(2, "Racer 2", 201),
            position(1, "Racer 1", 195),
        ];
        let markup = results_view(&positions, Some(1));

        assert!(markup.contains("Race Results"));
        assert!(markup.contains("1 - Racer 2"));
        assert!(markup.contains("2 - Racer 1 (you)"));
    }
}
