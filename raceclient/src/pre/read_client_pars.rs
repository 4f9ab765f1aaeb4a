use crate::interfaces::view_interface::DEFAULT_UPDATE_INTERVAL_MS;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// * `update_interval_ms` - (ms) Fixed delay between two race status polls
/// * `request_timeout_ms` - (ms) Timeout applied to every single HTTP request
/// * `max_fetch_attempts` - Number of attempts for one status fetch (first try included), should
/// be in the range [1, 10]
/// * `backoff_base_ms` - (ms) Base delay of the exponential retry backoff
/// * `max_race_duration_s` - (s) Overall deadline for polling a single race
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientPars {
    pub update_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub max_fetch_attempts: u32,
    pub backoff_base_ms: u64,
    pub max_race_duration_s: u64,
}

impl Default for ClientPars {
    fn default() -> Self {
        ClientPars {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            request_timeout_ms: 5_000,
            max_fetch_attempts: 3,
            backoff_base_ms: 250,
            max_race_duration_s: 600,
        }
    }
}

/// read_client_pars reads the JSON file and decodes the JSON string into the client parameter
/// struct. Without a file path the built-in defaults are used; fields missing in the file keep
/// their defaults as well.
pub fn read_client_pars(filepath: Option<&Path>) -> anyhow::Result<ClientPars> {
    let filepath = match filepath {
        Some(filepath) => filepath,
        None => return Ok(ClientPars::default()),
    };

    // open file
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open parameter file {}!",
            filepath.to_str().unwrap()
        ))?;

    // read and parse parameter file content
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse parameter file {}!",
        filepath.to_str().unwrap()
    ))?;
    Ok(pars)
}
