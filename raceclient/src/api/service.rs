use crate::api::error::Result;
use crate::api::models::{Race, Racer, Track};
use async_trait::async_trait;

/// RaceService is the seam to the external race server. The HTTP client implements it for
/// production use; the race flow and the tests run against it, so scripted implementations can
/// stand in for the server.
#[async_trait]
pub trait RaceService: Send + Sync {
    /// get_tracks lists the tracks available for selection.
    async fn get_tracks(&self) -> Result<Vec<Track>>;

    /// get_racers lists the racers (cars) available for selection.
    async fn get_racers(&self) -> Result<Vec<Racer>>;

    /// create_race creates a race for the given player on the given track and returns the race
    /// object carrying the new race id.
    async fn create_race(&self, player_id: u32, track_id: u32) -> Result<Race>;

    /// start_race starts the given race. The response body carries no information the client
    /// needs, so only the status is checked.
    async fn start_race(&self, race_id: u32) -> Result<()>;

    /// get_race fetches the current status and leaderboard positions of the given race.
    async fn get_race(&self, race_id: u32) -> Result<Race>;

    /// accelerate speeds up the player's car in the given race. A non-2xx response is an explicit
    /// error so the caller can react to it.
    async fn accelerate(&self, race_id: u32) -> Result<()>;
}
