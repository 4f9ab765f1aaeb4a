pub mod check_client_opts_pars;
pub mod client_opts;
pub mod read_client_pars;
