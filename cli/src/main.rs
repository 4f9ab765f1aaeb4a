use anyhow::Context;
use clap::Parser;
use helpers::buffer::RingBuffer;
use helpers::general::{max, InputValueError};
use raceclient::api::client::ApiClient;
use raceclient::api::models::{Racer, Track};
use raceclient::api::service::RaceService;
use raceclient::core::handle_race::handle_race;
use raceclient::core::poll::PollOpts;
use raceclient::core::store::RaceContext;
use raceclient::interfaces::view_interface::ViewUpdate;
use raceclient::pre::check_client_opts_pars::check_client_opts_pars;
use raceclient::pre::client_opts::ClientOpts;
use raceclient::pre::read_client_pars::read_client_pars;
use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;
use views::core::markup;
use views::interfaces::raceclient_interface::RaceclientInterface;

// the countdown always ticks in real time, only the start value is configurable
const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // initialize diagnostics logging (RUST_LOG overrides the default filter)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cli=info,raceclient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // get client options from the command line arguments and read the client parameters
    let client_opts: ClientOpts = ClientOpts::parse();
    let client_pars = read_client_pars(client_opts.parfile_path.as_deref())?;

    // check client options and parameters
    check_client_opts_pars(&client_opts, &client_pars)?;

    // set up the API client
    let base_url =
        Url::parse(&client_opts.server_url).context("Failed to parse the server URL!")?;
    let service = ApiClient::new(
        base_url,
        Duration::from_millis(client_pars.request_timeout_ms),
    )?;

    // EXECUTION -----------------------------------------------------------------------------------
    // fetch the selectable tracks and racers and render the card lists
    println!(
        "INFO: Fetching tracks and racers from {}",
        client_opts.server_url
    );

    let tracks = service
        .get_tracks()
        .await
        .context("Failed to fetch the track list!")?;
    let racers = service
        .get_racers()
        .await
        .context("Failed to fetch the racer list!")?;

    println!(
        "{}",
        markup::render_selection_view(
            &tracks,
            &racers,
            client_opts.track_id,
            client_opts.racer_id
        )
    );

    // resolve the selection -> every step produces a new context value
    let ctx = RaceContext::new();

    let track = resolve_track(&tracks, client_opts.track_id)?;
    let ctx = ctx.with_track(track.id, &track.name);
    tracing::debug!(?ctx, "selection context updated");

    let racer = resolve_racer(&racers, client_opts.racer_id)?;
    let ctx = ctx.with_racer(racer.id, &racer.driver_name);
    tracing::debug!(?ctx, "selection context updated");

    println!("INFO: Racing on {} as {}", track.name, racer.driver_name);
    println!("INFO: Press Enter during the race to accelerate, enter q to abort");

    // create channels for the communication between the race flow, the renderer and the input
    // thread
    let (view_tx, view_rx) = flume::unbounded();
    let (accelerate_tx, accelerate_rx) = flume::unbounded();
    let (cancel_tx, cancel_rx) = flume::unbounded();

    // spawn a blocking reader thread for the gas pedal / abort input
    let _input_thread = thread::spawn(move || {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };

            if line.trim() == "q" {
                let _ = cancel_tx.send(());
                break;
            }

            if accelerate_tx.send(()).is_err() {
                break;
            }
        }
    });

    // run the race flow as a separate task -> the required values get moved and must therefore be
    // copied to be still available afterwards
    let poll_opts = PollOpts::from_client_pars(&client_pars);
    let countdown_from = client_opts.countdown_from;
    let service_flow = service.clone();
    let ctx_flow = ctx.clone();

    let flow = tokio::spawn(async move {
        handle_race(
            &service_flow,
            &ctx_flow,
            countdown_from,
            COUNTDOWN_TICK,
            &poll_opts,
            &view_tx,
            &accelerate_rx,
            &cancel_rx,
        )
        .await
    });

    // render view updates until the flow side drops its sender
    let mut interface = RaceclientInterface::new(view_rx);
    let mut update_intervals: RingBuffer<u32> = RingBuffer::new(10);
    let mut prev_update = Instant::now();

    while let Some(update) = interface.next_update().await {
        update_intervals.push(prev_update.elapsed().as_millis() as u32);
        prev_update = Instant::now();

        match update {
            ViewUpdate::RaceStart {
                track_name,
                countdown_from,
            } => {
                println!("{}", markup::render_race_start_view(&track_name, countdown_from));
            }
            ViewUpdate::Countdown(value) => {
                println!("{}", markup::render_countdown(value));
            }
            ViewUpdate::Leaderboard(snapshot) => {
                println!("{}", markup::race_progress(&snapshot.positions, ctx.racer_id()));

                let segments: Vec<u32> = snapshot
                    .positions
                    .iter()
                    .map(|position| position.segment)
                    .collect();

                if !segments.is_empty() {
                    println!("INFO: Leader at segment {}", max(&segments));
                }

                if client_opts.debug {
                    if let Some(avg) = update_intervals.get_avg() {
                        println!("DEBUG: Average view update interval: {:.0}ms", avg);
                    }
                }
            }
            ViewUpdate::FinalResults(snapshot) => {
                println!("{}", markup::results_view(&snapshot.positions, ctx.racer_id()));
            }
        }
    }

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print results
    let outcome = flow.await.context("Race flow task failed!")??;
    outcome.print_final_standings();

    Ok(())
}

/// resolve_track returns the track matching the inserted id, or prompts for one on stdin if no id
/// was given. An id matching no listed track is an input value error.
fn resolve_track(tracks: &[Track], track_id: Option<u32>) -> anyhow::Result<Track> {
    let track_id = match track_id {
        Some(track_id) => track_id,
        None => prompt_for_id("Enter the id of the track to race on:")?,
    };

    tracks
        .iter()
        .find(|track| track.id == track_id)
        .cloned()
        .ok_or(InputValueError)
        .context(format!("No track with id {} is available!", track_id))
}

/// resolve_racer returns the racer matching the inserted id, or prompts for one on stdin if no id
/// was given. An id matching no listed racer is an input value error.
fn resolve_racer(racers: &[Racer], racer_id: Option<u32>) -> anyhow::Result<Racer> {
    let racer_id = match racer_id {
        Some(racer_id) => racer_id,
        None => prompt_for_id("Enter the id of the racer to drive:")?,
    };

    racers
        .iter()
        .find(|racer| racer.id == racer_id)
        .cloned()
        .ok_or(InputValueError)
        .context(format!("No racer with id {} is available!", racer_id))
}

/// prompt_for_id reads one line from stdin and parses it as an integer id.
fn prompt_for_id(prompt: &str) -> anyhow::Result<u32> {
    println!("{}", prompt);

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin!")?;

    input
        .trim()
        .parse()
        .context("Failed to parse the entered id as an integer!")
}
