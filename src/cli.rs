use clap::Parser;

/// Tray icon showing the playback progress of an MPD server.
#[derive(Debug, Default, Parser)]
#[command(name = "mpdtray", version, about)]
pub struct Args {
    /// MPD host [default: localhost]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// MPD port [default: 6600]
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Connection timeout in milliseconds, 0 for the client default [default: 0]
    #[arg(short, long)]
    pub timeout: Option<u64>,
}
