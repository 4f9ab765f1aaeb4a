use crate::api::models::{CarPosition, Race, RaceStatus};
use crate::api::service::RaceService;
use crate::interfaces::view_interface::{RaceSnapshot, ViewUpdate};
use crate::pre::read_client_pars::ClientPars;
use anyhow::Context;
use flume::{Receiver, Sender};
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};

/// * `update_interval` - Fixed delay between two race status polls
/// * `max_fetch_attempts` - Number of attempts for one status fetch before the race is given up
/// * `backoff_base` - Base delay of the exponential retry backoff
/// * `max_race_duration` - Overall deadline for polling a single race
#[derive(Debug, Clone)]
pub struct PollOpts {
    pub update_interval: Duration,
    pub max_fetch_attempts: u32,
    pub backoff_base: Duration,
    pub max_race_duration: Duration,
}

impl PollOpts {
    pub fn from_client_pars(client_pars: &ClientPars) -> PollOpts {
        PollOpts {
            update_interval: Duration::from_millis(client_pars.update_interval_ms),
            max_fetch_attempts: client_pars.max_fetch_attempts,
            backoff_base: Duration::from_millis(client_pars.backoff_base_ms),
            max_race_duration: Duration::from_secs(client_pars.max_race_duration_s),
        }
    }
}

/// run_race polls the race status on a fixed interval until a terminal state is reached and
/// publishes a leaderboard snapshot to the view channel for every in-progress response. It
/// resolves with the final positions, or with None if the race had to be given up (fetch retries
/// exhausted, deadline exceeded, or cancellation requested). Accelerate commands arriving on
/// their channel are serviced between polls; their failures are logged but do not end the race.
pub async fn run_race(
    service: &dyn RaceService,
    race_id: u32,
    poll_opts: &PollOpts,
    tx: &Sender<ViewUpdate>,
    accelerate_rx: &Receiver<()>,
    cancel_rx: &Receiver<()>,
) -> anyhow::Result<Option<Vec<CarPosition>>> {
    let deadline = Instant::now() + poll_opts.max_race_duration;
    let mut next_poll = Instant::now() + poll_opts.update_interval;

    // the input channels close once their sender side is gone; a closed channel must no longer be
    // polled, otherwise the select would spin on it
    let mut accelerate_open = true;
    let mut cancel_open = true;

    loop {
        tokio::select! {
            _ = sleep_until(next_poll) => {
                next_poll += poll_opts.update_interval;

                if Instant::now() >= deadline {
                    tracing::warn!(race_id, "race deadline exceeded, giving up on the race");
                    return Ok(None);
                }

                // fetch the race status; exhausting the retries gives up on the race
                let race = match fetch_with_retries(service, race_id, poll_opts).await {
                    Some(race) => race,
                    None => return Ok(None),
                };

                match race.status {
                    RaceStatus::InProgress => {
                        tx.send(ViewUpdate::Leaderboard(RaceSnapshot {
                            status: race.status,
                            positions: race.positions,
                        }))
                        .context("Failed to send leaderboard snapshot to the view!")?;
                    }
                    RaceStatus::Finished => {
                        tx.send(ViewUpdate::FinalResults(RaceSnapshot {
                            status: RaceStatus::Finished,
                            positions: race.positions.to_owned(),
                        }))
                        .context("Failed to send final results to the view!")?;
                        return Ok(Some(race.positions));
                    }
                    // not yet started, keep polling without publishing
                    _ => {}
                }
            }
            accelerate = accelerate_rx.recv_async(), if accelerate_open => {
                match accelerate {
                    Ok(()) => match service.accelerate(race_id).await {
                        Ok(()) => tracing::debug!(race_id, "acceleration successful"),
                        Err(error) => tracing::warn!(race_id, %error, "acceleration failed"),
                    },
                    Err(_) => accelerate_open = false,
                }
            }
            cancel = cancel_rx.recv_async(), if cancel_open => {
                match cancel {
                    Ok(()) => {
                        tracing::info!(race_id, "race polling cancelled");
                        return Ok(None);
                    }
                    Err(_) => cancel_open = false,
                }
            }
        }
    }
}

/// fetch_with_retries fetches the race status with a bounded number of attempts and exponential
/// backoff in between. Returns None once all attempts failed.
async fn fetch_with_retries(
    service: &dyn RaceService,
    race_id: u32,
    poll_opts: &PollOpts,
) -> Option<Race> {
    for attempt in 1..=poll_opts.max_fetch_attempts {
        match service.get_race(race_id).await {
            Ok(race) => {
                tracing::debug!(race_id, status = ?race.status, "race status received");
                return Some(race);
            }
            Err(error) => {
                tracing::warn!(race_id, attempt, %error, "status fetch failed");

                if attempt < poll_opts.max_fetch_attempts {
                    sleep(poll_opts.backoff_base * 2_u32.pow(attempt - 1)).await;
                }
            }
        }
    }

    tracing::error!(
        race_id,
        attempts = poll_opts.max_fetch_attempts,
        "giving up on the race after repeated fetch failures"
    );
    None
}
