use crate::api::models::{CarPosition, RaceStatus};

pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 200;

/// RaceSnapshot carries one leaderboard state from the poll loop to the renderer.
#[derive(Debug, Clone, Default)]
pub struct RaceSnapshot {
    pub status: RaceStatus,
    pub positions: Vec<CarPosition>,
}

/// ViewUpdate is the message type of the flow→renderer channel. The renderer maps every variant
/// onto one of its render targets.
#[derive(Debug, Clone)]
pub enum ViewUpdate {
    RaceStart {
        track_name: String,
        countdown_from: u32,
    },
    Countdown(u32),
    Leaderboard(RaceSnapshot),
    FinalResults(RaceSnapshot),
}
