use serde::{Deserialize, Serialize};

/// * `id` - Track identifier assigned by the race server
/// * `name` - Track display name
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Track {
    pub id: u32,
    pub name: String,
}

/// * `id` - Racer (car) identifier assigned by the race server
/// * `driver_name` - Driver display name
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Racer {
    pub id: u32,
    pub driver_name: String,
}

/// CreateRaceBody is the JSON request body of the create-race operation. Both ids are sent as
/// integers.
#[derive(Debug, Serialize)]
pub struct CreateRaceBody {
    pub player_id: u32,
    pub track_id: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub enum RaceStatus {
    #[serde(rename = "unstarted")]
    Unstarted,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "finished")]
    Finished,
    // any status string the server adds later is treated as non-terminal
    #[serde(other)]
    Unknown,
}

impl RaceStatus {
    /// is_terminal returns true for the single status after which polling must stop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RaceStatus::Finished)
    }
}

impl Default for RaceStatus {
    fn default() -> Self {
        RaceStatus::Unstarted
    }
}

/// * `id` - Racer (car) identifier of this leaderboard entry
/// * `driver_name` - Driver display name
/// * `segment` - Track segment reached so far, the progress metric used for ranking
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CarPosition {
    pub id: u32,
    pub driver_name: String,
    pub segment: u32,
}

/// Race is the server's race object. The create response carries the id under the `ID` key, the
/// status response carries status and positions only, so all fields fall back to their defaults
/// when missing.
#[derive(Debug, Deserialize, Clone)]
pub struct Race {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(default)]
    pub status: RaceStatus,
    #[serde(default)]
    pub positions: Vec<CarPosition>,
}
