use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    name = "race-client",
    about = "A command line client for a racing-game web API"
)]
pub struct ClientOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug printing of view update timing
    #[clap(short, long)]
    pub debug: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set countdown start value shown before the race begins, should be in the range [1, 10]
    #[clap(short, long, default_value = "3")]
    pub countdown_from: u32,

    /// Set path to an optional client parameter file (JSON)
    #[clap(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set id of the racer to drive (prompted on stdin if omitted)
    #[clap(short, long)]
    pub racer_id: Option<u32>,

    /// Set base address of the race server
    #[clap(short, long, default_value = "http://localhost:3001")]
    pub server_url: String,

    /// Set id of the track to race on (prompted on stdin if omitted)
    #[clap(short, long)]
    pub track_id: Option<u32>,
}
