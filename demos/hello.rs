use std::io;

use kani::{ENDL, WriteAnsi, background, color, effect};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    kani::enable_virtual_terminal();

    let mut stdout = io::stdout().lock();
    stdout
        .put(&background::WHITE)?
        .put(&color::RED)?
        .put("Hello, World!")?
        .put(&effect::RESET)?
        .put(&ENDL)?;
    Ok(())
}
