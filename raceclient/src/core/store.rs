/// * `id` - Track identifier as listed by the race server
/// * `name` - Track display name
#[derive(Debug, Clone)]
pub struct TrackSelection {
    pub id: u32,
    pub name: String,
}

/// * `id` - Racer (car) identifier as listed by the race server
/// * `name` - Driver display name
#[derive(Debug, Clone)]
pub struct RacerSelection {
    pub id: u32,
    pub name: String,
}

/// RaceContext carries the user's selection through the race flow. It is never mutated in place;
/// every selection step produces a new context value, so handlers only ever share immutable
/// snapshots.
#[derive(Debug, Clone, Default)]
pub struct RaceContext {
    track: Option<TrackSelection>,
    racer: Option<RacerSelection>,
    race_id: Option<u32>,
}

impl RaceContext {
    pub fn new() -> RaceContext {
        RaceContext::default()
    }

    /// with_track returns a new context with the given track selected.
    pub fn with_track(&self, id: u32, name: &str) -> RaceContext {
        let mut ctx = self.clone();
        ctx.track = Some(TrackSelection {
            id,
            name: name.to_owned(),
        });
        ctx
    }

    /// with_racer returns a new context with the given racer selected.
    pub fn with_racer(&self, id: u32, name: &str) -> RaceContext {
        let mut ctx = self.clone();
        ctx.racer = Some(RacerSelection {
            id,
            name: name.to_owned(),
        });
        ctx
    }

    /// with_race_id returns a new context carrying the id of the created race.
    pub fn with_race_id(&self, race_id: u32) -> RaceContext {
        let mut ctx = self.clone();
        ctx.race_id = Some(race_id);
        ctx
    }

    pub fn track(&self) -> Option<&TrackSelection> {
        self.track.as_ref()
    }

    pub fn racer(&self) -> Option<&RacerSelection> {
        self.racer.as_ref()
    }

    pub fn race_id(&self) -> Option<u32> {
        self.race_id
    }

    pub fn racer_id(&self) -> Option<u32> {
        self.racer.as_ref().map(|racer| racer.id)
    }
}
