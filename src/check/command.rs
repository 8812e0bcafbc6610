//! Blocking command execution with a deadline.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::utils::{ContribError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs `command` and returns its trimmed stdout.
///
/// stdout is drained on a helper thread so a chatty child cannot fill the
/// pipe and stall. On timeout the child is killed and reaped; non-zero exit
/// is an error as well. stderr is discarded.
pub fn run_with_timeout(mut command: Command, timeout: Duration) -> Result<String> {
    let program = command.get_program().to_string_lossy().into_owned();

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ContribError::Spawn { program: program.clone(), source })?;

    let mut stdout = child.stdout.take();
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(out) = stdout.as_mut() {
            let _ = out.read_to_end(&mut buf);
        }
        buf
    });

    let started = Instant::now();
    let status = loop {
        let polled = match child.try_wait() {
            Ok(polled) => polled,
            Err(e) => {
                reap(&mut child);
                return Err(e.into());
            }
        };
        match polled {
            Some(status) => break status,
            None if started.elapsed() >= timeout => {
                reap(&mut child);
                // reader is left detached, it exits once the pipe closes
                return Err(ContribError::Timeout { program, secs: timeout.as_secs() });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    let bytes = reader.join().unwrap_or_default();

    if !status.success() {
        return Err(ContribError::CommandFailed { program, code: status.code() });
    }

    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
