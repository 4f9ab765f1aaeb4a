use crate::pre::client_opts::ClientOpts;
use crate::pre::read_client_pars::ClientPars;
use anyhow::Context;
use helpers::general::InputValueError;
use url::Url;

/// check_client_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_client_opts_pars(
    client_opts: &ClientOpts,
    client_pars: &ClientPars,
) -> anyhow::Result<()> {
    // PART 1: CLIENT OPTIONS
    if Url::parse(&client_opts.server_url).is_err() {
        return Err(InputValueError).context(format!(
            "server_url {} could not be parsed as a base address!",
            client_opts.server_url
        ));
    }

    if !(1 <= client_opts.countdown_from && client_opts.countdown_from <= 10) {
        return Err(InputValueError).context(format!(
            "countdown_from is {}, which is not within the reasonable range of [1, 10]!",
            client_opts.countdown_from
        ));
    }

    // PART 2: CLIENT PARAMETERS
    // POLLING -------------------------------------------------------------------------------------
    if !(50 <= client_pars.update_interval_ms && client_pars.update_interval_ms <= 5_000) {
        return Err(InputValueError).context(format!(
            "update_interval_ms is {}ms, which is not within the reasonable range of \
            [50, 5000]ms!",
            client_pars.update_interval_ms
        ));
    }

    if !(10 <= client_pars.max_race_duration_s && client_pars.max_race_duration_s <= 3_600) {
        return Err(InputValueError).context(format!(
            "max_race_duration_s is {}s, which is not within the reasonable range of [10, 3600]s!",
            client_pars.max_race_duration_s
        ));
    }

    // RETRIES -------------------------------------------------------------------------------------
    if !(1 <= client_pars.max_fetch_attempts && client_pars.max_fetch_attempts <= 10) {
        return Err(InputValueError).context(format!(
            "max_fetch_attempts is {}, which is not within the reasonable range of [1, 10]!",
            client_pars.max_fetch_attempts
        ));
    }

    if !(10 <= client_pars.backoff_base_ms && client_pars.backoff_base_ms <= 5_000) {
        return Err(InputValueError).context(format!(
            "backoff_base_ms is {}ms, which is not within the reasonable range of [10, 5000]ms!",
            client_pars.backoff_base_ms
        ));
    }

    // REQUESTS ------------------------------------------------------------------------------------
    if !(1_000 <= client_pars.request_timeout_ms && client_pars.request_timeout_ms <= 60_000) {
        return Err(InputValueError).context(format!(
            "request_timeout_ms is {}ms, which is not within the reasonable range of \
            [1000, 60000]ms!",
            client_pars.request_timeout_ms
        ));
    }

    Ok(())
}
