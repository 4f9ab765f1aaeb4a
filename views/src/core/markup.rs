use helpers::general::{argsort, SortOrder};
use raceclient::api::models::{CarPosition, Racer, Track};
use std::fmt::Write;

/// render_track_cards renders one selectable card per track, or a loading placeholder while the
/// track list is still empty. The card of a selected track carries the selected class; the track
/// id becomes the card's identifier.
pub fn render_track_cards(tracks: &[Track], selected_id: Option<u32>) -> String {
    if tracks.is_empty() {
        return String::from("<h4>Loading Tracks...</h4>");
    }

    let mut tmp_string_cards = String::from("<ul id=\"tracks\">\n");

    for track in tracks.iter() {
        let tmp_class = if selected_id == Some(track.id) {
            "card track selected"
        } else {
            "card track"
        };

        writeln!(
            &mut tmp_string_cards,
            "<h4 id=\"{}\" class=\"{}\">{}</h4>",
            track.id, tmp_class, track.name
        )
        .unwrap();
    }

    tmp_string_cards.push_str("</ul>");
    tmp_string_cards
}

/// render_racer_cards renders one selectable card per racer, analogous to the track cards.
pub fn render_racer_cards(racers: &[Racer], selected_id: Option<u32>) -> String {
    if racers.is_empty() {
        return String::from("<h4>Loading Racers...</h4>");
    }

    let mut tmp_string_cards = String::from("<ul id=\"racers\">\n");

    for racer in racers.iter() {
        let tmp_class = if selected_id == Some(racer.id) {
            "card racer selected"
        } else {
            "card racer"
        };

        writeln!(
            &mut tmp_string_cards,
            "<h4 class=\"{}\" id=\"{}\">{}</h4>",
            tmp_class, racer.id, racer.driver_name
        )
        .unwrap();
    }

    tmp_string_cards.push_str("</ul>");
    tmp_string_cards
}

/// render_selection_view renders the selection page: both card lists in their render targets plus
/// the submit control that kicks off race creation.
pub fn render_selection_view(
    tracks: &[Track],
    racers: &[Racer],
    selected_track: Option<u32>,
    selected_racer: Option<u32>,
) -> String {
    format!(
        "<header>\n\
         <h1>Select a track and a racer</h1>\n\
         </header>\n\
         <main>\n\
         <section id=\"tracks\">\n\
         {}\n\
         </section>\n\
         <section id=\"racers\">\n\
         {}\n\
         </section>\n\
         <button id=\"submit-create-race\">Start your engines!</button>\n\
         </main>",
        render_track_cards(tracks, selected_track),
        render_racer_cards(racers, selected_racer)
    )
}

/// render_countdown renders the big countdown number.
pub fn render_countdown(count: u32) -> String {
    format!(
        "<h2>Race Starts In...</h2>\n<p id=\"big-numbers\">{}</p>",
        count
    )
}

/// render_race_start_view renders the race view shown from race creation onwards: the leaderboard
/// panel holding the initial countdown and the accelerate control.
pub fn render_race_start_view(track_name: &str, countdown_from: u32) -> String {
    format!(
        "<header>\n\
         <h1>Race: {}</h1>\n\
         </header>\n\
         <main id=\"two-columns\">\n\
         <section id=\"leaderBoard\">\n\
         {}\n\
         </section>\n\
         <section id=\"accelerate\">\n\
         <h2>Directions</h2>\n\
         <p>Click the button as fast as you can to make your racer go faster!</p>\n\
         <button id=\"gas-peddle\">Click Me To Win!</button>\n\
         </section>\n\
         </main>\n\
         <footer></footer>",
        track_name,
        render_countdown(countdown_from)
    )
}

/// race_progress renders the live leaderboard. The entries are ranked by descending segment (ties
/// keep their incoming order) and the entry matching the player id is marked with "(you)".
pub fn race_progress(positions: &[CarPosition], player_id: Option<u32>) -> String {
    // rank the entries by their progress metric, best first
    let segments: Vec<u32> = positions.iter().map(|position| position.segment).collect();
    let ranking = argsort(&segments, SortOrder::Descending);

    let mut tmp_string_rows = String::new();

    for (place, &idx) in ranking.iter().enumerate() {
        let position = &positions[idx];
        let mut driver_name = position.driver_name.to_owned();

        if player_id == Some(position.id) {
            driver_name.push_str(" (you)");
        }

        writeln!(
            &mut tmp_string_rows,
            "<tr><td><h3>{} - {}</h3></td></tr>",
            place + 1,
            driver_name
        )
        .unwrap();
    }

    format!("<table>\n{}</table>", tmp_string_rows)
}

/// results_view renders the final standings in the order the server reported them.
pub fn results_view(positions: &[CarPosition], player_id: Option<u32>) -> String {
    let mut tmp_string_rows = String::new();

    for (place, position) in positions.iter().enumerate() {
        let mut driver_name = position.driver_name.to_owned();

        if player_id == Some(position.id) {
            driver_name.push_str(" (you)");
        }

        writeln!(
            &mut tmp_string_rows,
            "<tr><td><h3>{} - {}</h3></td></tr>",
            place + 1,
            driver_name
        )
        .unwrap();
    }

    format!(
        "<header>\n\
         <h1>Race Results</h1>\n\
         </header>\n\
         <main>\n\
         <h3>Race Results</h3>\n\
         <p>The race is done! Here are the final results:</p>\n\
         {}</main>",
        tmp_string_rows
    )
}
