use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{program}` failed with status {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Execute `program` with `args`, writing `input` to its stdin.
///
/// Returns the command's stdout on success. Stderr is captured and attached
/// to [`ShellError::CommandFailed`] when the command exits unsuccessfully.
///
/// # Arguments
///
/// * `program` - Executable name or path, resolved through `PATH`
/// * `args` - Arguments passed verbatim, no shell interpretation
/// * `input` - Bytes written to the command's stdin
/// * `timeout` - Optional timeout; if exceeded, the process is killed
///
/// # Notes
///
/// The entire stdout is buffered in memory before being returned.
pub fn run_piped(
    program: &str,
    args: &[String],
    input: &[u8],
    timeout: Option<Duration>,
) -> Result<Vec<u8>, ShellError> {
    log::debug!("running `{}` with {} argument(s)", program, args.len());

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ShellError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Each pipe gets its own thread: a child that starts writing before it
    // has read all of stdin would otherwise block on a full pipe.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_vec();
        thread::spawn(move || stdin.write_all(&input))
    });
    let stdout = child
        .stdout
        .take()
        .map(|out| thread::spawn(move || read_all(out)));
    let stderr = child
        .stderr
        .take()
        .map(|err| thread::spawn(move || read_all(err)));

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                child.kill()?;
                child.wait()?;
                return Err(ShellError::Timeout(program.to_string(), duration));
            }
        },
        None => child.wait()?,
    };

    if let Some(Err(err)) = join(writer)? {
        // A converter may exit before draining stdin; the exit status decides.
        if err.kind() != io::ErrorKind::BrokenPipe {
            return Err(err.into());
        }
    }
    let output = join(stdout)?.transpose()?.unwrap_or_default();
    let errors = join(stderr)?.transpose()?.unwrap_or_default();

    if !status.success() {
        return Err(ShellError::CommandFailed {
            program: program.to_string(),
            status,
            stderr: String::from_utf8_lossy(&errors).trim().to_string(),
        });
    }

    Ok(output)
}

fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn join<T>(handle: Option<JoinHandle<T>>) -> io::Result<Option<T>> {
    match handle {
        Some(h) => h
            .join()
            .map(Some)
            .map_err(|_| io::Error::other("pipe thread panicked")),
        None => Ok(None),
    }
}
