//! The interactive command loop.

use crate::clock::Clock;
use crate::commands::{Command, CommandHandler, Reply};
use crate::config::Config;
use crate::models::Directory;
use crate::repositories::DirectoryRepository;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run commands from `input` until `close`/`exit` or end of input, then
/// save the directory through `repository`.
///
/// Command failures are reported on `output` and the loop continues. Lines
/// that are not valid UTF-8 are read lossily and rejected like any other
/// unknown command. The directory is saved even when reading input or
/// writing output fails; that failure is returned after the save.
///
/// # Returns
/// The directory as it was saved
pub fn run_session<R, W>(
    input: R,
    output: &mut W,
    mut directory: Directory,
    repository: &dyn DirectoryRepository,
    config: &Config,
    clock: &dyn Clock,
) -> Result<Directory>
where
    R: BufRead,
    W: Write,
{
    let handler = CommandHandler::new(config);

    let outcome = run_commands(input, &mut *output, &mut directory, &handler, clock)
        .and_then(|()| Ok(writeln!(output, "Saving data...")?));
    if let Err(e) = &outcome {
        warn!("Session ended early: {:#}", e);
    }

    repository
        .save(&directory)
        .context("Failed to save contacts")?;
    outcome?;
    writeln!(output, "Good bye!")?;

    Ok(directory)
}

fn run_commands<R, W>(
    mut input: R,
    output: &mut W,
    directory: &mut Directory,
    handler: &CommandHandler,
    clock: &dyn Clock,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    writeln!(output, "{}", GREETING)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            info!("End of input, closing session");
            writeln!(output)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line is not valid UTF-8");
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Rejected input: {}", e);
                writeln!(output, "{}", e.user_message())?;
                continue;
            }
        };

        debug!("Executing {:?}", command);
        match handler.execute(command, directory, clock.today()) {
            Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
            Ok(Reply::Exit) => return Ok(()),
            Err(e) => {
                warn!("Command failed: {}", e);
                writeln!(output, "{}", e.user_message())?;
            }
        }
    }
}
