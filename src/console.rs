#[cfg(windows)]
use winapi_util::console as wincon;

/// Enable virtual terminal processing on the stdout console.
///
/// Windows consoles print ANSI escape sequences as literal text unless this
/// mode is turned on. The current console mode is read and the virtual
/// terminal flag is added to it; every other mode bit is left alone.
///
/// If the mode can't be read, for example because stdout is redirected to a
/// file, then nothing happens. Failure is never reported. Calling this more
/// than once has the same effect as calling it once.
#[cfg(windows)]
pub fn enable_virtual_terminal() {
    let mut con = match wincon::Console::stdout() {
        Ok(con) => con,
        Err(err) => {
            tracing::debug!(%err, "stdout is not a console");
            return;
        }
    };
    match con.set_virtual_terminal_processing(true) {
        Ok(()) => tracing::debug!("virtual terminal processing enabled"),
        Err(err) => {
            tracing::debug!(%err, "could not enable virtual terminal processing")
        }
    }
}

/// Enable virtual terminal processing on the stdout console.
///
/// Terminals on this platform interpret ANSI escape sequences natively, so
/// the console is left untouched.
#[cfg(not(windows))]
pub fn enable_virtual_terminal() {
    tracing::trace!("ANSI escape sequences are interpreted natively");
}

#[cfg(test)]
mod tests {
    use super::enable_virtual_terminal;

    // stdout may or may not be a console under the test runner. Either way
    // the call returns quietly.
    #[test]
    fn enable_is_silent_and_repeatable() {
        enable_virtual_terminal();
        enable_virtual_terminal();
    }
}
