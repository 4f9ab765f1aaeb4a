use crate::api::service::RaceService;
use crate::core::countdown::run_countdown;
use crate::core::poll::{run_race, PollOpts};
use crate::core::store::RaceContext;
use crate::interfaces::view_interface::ViewUpdate;
use crate::post::race_outcome::RaceOutcome;
use anyhow::Context;
use flume::{Receiver, Sender};
use std::time::Duration;

/// handle_race drives one race from creation to its terminal state on the basis of a completed
/// selection context, and returns the outcome for post-processing. Live view updates are
/// published on the inserted channel sender.
pub async fn handle_race(
    service: &dyn RaceService,
    ctx: &RaceContext,
    countdown_from: u32,
    countdown_tick: Duration,
    poll_opts: &PollOpts,
    tx: &Sender<ViewUpdate>,
    accelerate_rx: &Receiver<()>,
    cancel_rx: &Receiver<()>,
) -> anyhow::Result<RaceOutcome> {
    // a race requires both a track and a racer selection
    let track = ctx.track().context("No track selected!")?;
    let racer = ctx.racer().context("No racer selected!")?;

    // show the race start view
    tx.send(ViewUpdate::RaceStart {
        track_name: track.name.to_owned(),
        countdown_from,
    })
    .context("Failed to send race start view to the view!")?;

    // create the race on the server and record its id in a new context value
    let race = service
        .create_race(racer.id, track.id)
        .await
        .context("Failed to create the race!")?;
    let ctx = ctx.with_race_id(race.id);
    tracing::info!(race_id = race.id, "race created");

    // run the start countdown, then start the race
    run_countdown(countdown_from, countdown_tick, tx).await?;

    let race_id = ctx.race_id().context("Race id missing after race creation!")?;
    service
        .start_race(race_id)
        .await
        .context("Failed to start the race!")?;
    tracing::info!(race_id, "race started");

    // poll the race status until terminal, rendering intermediate leaderboards
    let final_positions = run_race(service, race_id, poll_opts, tx, accelerate_rx, cancel_rx)
        .await
        .context("Race polling failed!")?;

    Ok(RaceOutcome {
        track_name: track.name.to_owned(),
        player_id: ctx.racer_id(),
        final_positions,
    })
}
