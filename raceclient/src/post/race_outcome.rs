use crate::api::models::CarPosition;
use std::fmt::Write;

/// RaceOutcome contains all race information that is required for post-processing the results.
/// final_positions is None if the race ended without a terminal result (given up or cancelled).
pub struct RaceOutcome {
    pub track_name: String,
    pub player_id: Option<u32>,
    pub final_positions: Option<Vec<CarPosition>>,
}

impl RaceOutcome {
    /// print_final_standings prints the final standings to the console output, marking the user's
    /// own racer. A race without a terminal result prints a warning instead.
    pub fn print_final_standings(&self) {
        let positions = match &self.final_positions {
            Some(positions) => positions,
            None => {
                println!(
                    "WARNING: The race on {} produced no final result!",
                    self.track_name
                );
                return;
            }
        };

        // create string with one line per final standing
        let mut tmp_string_standings = String::new();

        for (place, position) in positions.iter().enumerate() {
            let mut driver_name = position.driver_name.to_owned();

            if Some(position.id) == self.player_id {
                driver_name.push_str(" (you)");
            }

            writeln!(&mut tmp_string_standings, "{:3} - {}", place + 1, driver_name).unwrap();
        }

        // print everything to the console
        println!("RESULT: Final standings on {}", self.track_name);
        print!("{}", tmp_string_standings);
    }
}
