use crate::interfaces::view_interface::ViewUpdate;
use anyhow::Context;
use flume::Sender;
use std::time::Duration;
use tokio::time::sleep;

/// run_countdown counts down from the inserted start value with a fixed tick duration. Every tick
/// decrements the value and publishes it to the view channel, so a start value of 3 displays
/// 2, 1, 0. Resolves once zero is reached. Pure timer, no network.
pub async fn run_countdown(
    from: u32,
    tick: Duration,
    tx: &Sender<ViewUpdate>,
) -> anyhow::Result<()> {
    let mut remaining = from;

    while remaining > 0 {
        sleep(tick).await;
        remaining -= 1;

        tx.send(ViewUpdate::Countdown(remaining))
            .context("Failed to send countdown value to the view!")?;
    }

    Ok(())
}
