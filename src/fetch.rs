use std::{
    io::{Error, ErrorKind},
    process::{Command, Stdio},
    time::Instant,
};

use crate::status::{StatusBuffer, StatusText};

fn capture(cmd: &[String], buffer: &mut StatusBuffer) -> Result<(), Error> {
    let (executable, args) = cmd
        .split_first()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "empty command"))?;

    let mut child = Command::new(executable.trim())
        .args(args.iter().map(|i| i.trim()))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let read = match child.stdout.take() {
        Some(stdout) => buffer.fill(stdout).map(|_| ()),
        None => Err(Error::new(ErrorKind::BrokenPipe, "stdout is not captured")),
    };

    /*
     * stdout is dropped by now, so a child that is still writing
     * gets EPIPE and exits instead of blocking the wait below
     */
    let exit_status = child.wait()?;

    log::debug!("command \"{}\" exited with {}", cmd.join(" "), exit_status);

    read
}

// Never fails, a command that cannot be started or read yields an empty text
pub fn fetch(cmd: &[String], mut buffer: StatusBuffer) -> StatusText {
    let now = Instant::now();
    let result = capture(cmd, &mut buffer);
    let took = now.elapsed().as_millis();

    match result {
        Ok(()) => {
            log::debug!("command \"{}\" OK, took {} ms", cmd.join(" "), took);
        }
        Err(err) => {
            log::debug!(
                "command \"{}\" FAILED, took {} ms, {}",
                cmd.join(" "),
                took,
                err
            );

            buffer.clear();
        }
    }

    buffer.into_text()
}
