use flume::Receiver;
use raceclient::interfaces::view_interface::ViewUpdate;

/// RaceclientInterface wraps the receiving end of the flow→renderer channel. The renderer pulls
/// one update at a time; the latest update stays available for re-rendering.
#[derive(Debug)]
pub struct RaceclientInterface {
    rx: Receiver<ViewUpdate>,
    pub latest: Option<ViewUpdate>,
}

impl RaceclientInterface {
    pub fn new(rx: Receiver<ViewUpdate>) -> RaceclientInterface {
        RaceclientInterface { rx, latest: None }
    }

    /// next_update waits for the next view update. Returns None once the flow side has finished
    /// and dropped its sender, which ends the render loop.
    pub async fn next_update(&mut self) -> Option<ViewUpdate> {
        match self.rx.recv_async().await {
            Ok(update) => {
                self.latest = Some(update.to_owned());
                Some(update)
            }
            Err(_) => None,
        }
    }
}
