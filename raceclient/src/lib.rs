pub mod api;
pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;

#[cfg(test)]
mod test_support {
    use crate::api::error::{RaceApiError, Result};
    use crate::api::models::{CarPosition, Race, RaceStatus, Racer, Track};
    use crate::api::service::RaceService;
    use crate::core::poll::PollOpts;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    /// One scripted reply of the status fetch.
    pub enum ScriptedStatus {
        Race(Race),
        Error,
    }

    /// ScriptedService replays a fixed sequence of status responses and records every operation
    /// call for ordering assertions. An exhausted script keeps answering with a server error.
    pub struct ScriptedService {
        pub statuses: Mutex<VecDeque<ScriptedStatus>>,
        pub calls: Mutex<Vec<String>>,
        pub fail_accelerate: bool,
    }

    impl ScriptedService {
        pub fn new(statuses: Vec<ScriptedStatus>) -> ScriptedService {
            ScriptedService {
                statuses: Mutex::new(statuses.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
                fail_accelerate: false,
            }
        }

        pub fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn server_error() -> RaceApiError {
            RaceApiError::ServerStatus {
                endpoint: String::from("http://localhost:3001/api/races/1"),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    #[async_trait]
    impl RaceService for ScriptedService {
        async fn get_tracks(&self) -> Result<Vec<Track>> {
            self.record(String::from("get_tracks"));
            Ok(vec![])
        }

        async fn get_racers(&self) -> Result<Vec<Racer>> {
            self.record(String::from("get_racers"));
            Ok(vec![])
        }

        async fn create_race(&self, player_id: u32, track_id: u32) -> Result<Race> {
            self.record(format!("create_race({}, {})", player_id, track_id));
            Ok(Race {
                id: 17,
                status: RaceStatus::Unstarted,
                positions: vec![],
            })
        }

        async fn start_race(&self, race_id: u32) -> Result<()> {
            self.record(format!("start_race({})", race_id));
            Ok(())
        }

        async fn get_race(&self, race_id: u32) -> Result<Race> {
            self.record(format!("get_race({})", race_id));
            match self.statuses.lock().unwrap().pop_front() {
                Some(ScriptedStatus::Race(race)) => Ok(race),
                Some(ScriptedStatus::Error) | None => Err(Self::server_error()),
            }
        }

        async fn accelerate(&self, race_id: u32) -> Result<()> {
            self.record(format!("accelerate({})", race_id));
            if self.fail_accelerate {
                Err(Self::server_error())
            } else {
                Ok(())
            }
        }
    }

    pub fn position(id: u32, driver_name: &str, segment: u32) -> CarPosition {
        CarPosition {
            id,
            driver_name: String::from(driver_name),
            segment,
        }
    }

    pub fn race_with(status: RaceStatus, positions: Vec<CarPosition>) -> ScriptedStatus {
        ScriptedStatus::Race(Race {
            id: 17,
            status,
            positions,
        })
    }

    pub fn fast_poll_opts() -> PollOpts {
        PollOpts {
            update_interval: Duration::from_millis(20),
            max_fetch_attempts: 3,
            backoff_base: Duration::from_millis(5),
            max_race_duration: Duration::from_secs(5),
        }
    }
}





#[cfg(test)]
mod flow_tests {
    use crate::api::models::RaceStatus;
    use crate::core::handle_race::handle_race;
    use crate::core::store::RaceContext;
    use crate::interfaces::view_interface::ViewUpdate;
    use crate::test_support::{fast_poll_opts, position, race_with, ScriptedService};
    use std::time::Duration;

    #[tokio::test]
    async fn test_handle_race_call_order_and_ids() {
        let final_positions = vec![position(2, "Racer 2", 201), position(3, "Racer 3", 180)];
        let service = ScriptedService::new(vec![race_with(
            RaceStatus::Finished,
            final_positions.to_owned(),
        )]);
        let (tx, rx) = flume::unbounded();
        let (_accelerate_tx, accelerate_rx) = flume::unbounded();
        let (_cancel_tx, cancel_rx) = flume::unbounded();

        let ctx = RaceContext::new()
            .with_track(6, "Executive Park")
            .with_racer(2, "Racer 2");

        let outcome = handle_race(
            &service,
            &ctx,
            3,
            Duration::from_millis(5),
            &fast_poll_opts(),
            &tx,
            &accelerate_rx,
            &cancel_rx,
        )
        .await
        .unwrap();

        // create (with integer ids from the selection) before start, start before the first poll,
        // all against the race id returned by the create operation
        assert_eq!(
            service.recorded_calls(),
            vec![
                String::from("create_race(2, 6)"),
                String::from("start_race(17)"),
                String::from("get_race(17)"),
            ]
        );

        assert_eq!(outcome.track_name, "Executive Park");
        assert_eq!(outcome.player_id, Some(2));
        assert_eq!(outcome.final_positions, Some(final_positions));

        // race start view first, then the countdown values, then the final snapshot
        let updates: Vec<ViewUpdate> = rx.try_iter().collect();
        assert!(matches!(updates[0], ViewUpdate::RaceStart { .. }));
        assert!(matches!(updates[1], ViewUpdate::Countdown(2)));
        assert!(matches!(updates[2], ViewUpdate::Countdown(1)));
        assert!(matches!(updates[3], ViewUpdate::Countdown(0)));
        assert!(matches!(updates[4], ViewUpdate::FinalResults(_)));
    }

    #[tokio::test]
    async fn test_handle_race_requires_selection() {
        let service = ScriptedService::new(vec![]);
        let (tx, _rx) = flume::unbounded();
        let (_accelerate_tx, accelerate_rx) = flume::unbounded();
        let (_cancel_tx, cancel_rx) = flume::unbounded();

        let result = handle_race(
            &service,
            &RaceContext::new(),
            3,
            Duration::from_millis(5),
            &fast_poll_opts(),
            &tx,
            &accelerate_rx,
            &cancel_rx,
        )
        .await;

        assert!(result.is_err());
        assert!(service.recorded_calls().is_empty());
    }
}
