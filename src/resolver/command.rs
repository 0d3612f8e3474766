//! Blocking wrappers around automation utilities.
//!
//! Two shapes are needed. [`capture`] collects stdout for tools that exit
//! once they have printed (`osascript`, `zenity`, `xclip -o`). [`status`]
//! discards output for tools that fork a background owner of the
//! selection (`xclip -i`, `wl-copy`); capturing their stdout would block
//! until the selection is replaced.

use std::ffi::OsStr;
use std::fmt::Debug;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use super::ResolverError;

/// Run `program` with `args`, returning its stdout on zero exit.
///
/// Stderr is captured and attached to the error on non-zero exit.
pub fn capture<S>(program: &str, args: &[S]) -> Result<Vec<u8>, ResolverError>
where
    S: AsRef<OsStr> + Debug,
{
    tracing::debug!(program, ?args, "running");
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ResolverError::Spawn {
            program: program.to_string(),
            source,
        })?;

    check(program, output)
}

/// Run `program` with `args`, piping `input` to stdin when given.
///
/// Stdout and stderr go to `/dev/null`. The child is always waited on; a
/// non-zero exit takes precedence over a failed stdin write, since a tool
/// that exits early breaks the pipe.
pub fn status<S>(program: &str, args: &[S], input: Option<&[u8]>) -> Result<(), ResolverError>
where
    S: AsRef<OsStr> + Debug,
{
    tracing::debug!(program, ?args, stdin_bytes = input.map(<[u8]>::len), "running");
    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ResolverError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Stdin is dropped at the end of the arm, closing the pipe.
    let written = match (input, child.stdin.take()) {
        (Some(content), Some(mut stdin)) => stdin.write_all(content),
        _ => Ok(()),
    };

    let exit = child.wait()?;
    if !exit.success() {
        return Err(ResolverError::Command {
            program: program.to_string(),
            code: exit.code(),
            stderr: String::new(),
        });
    }
    written?;
    Ok(())
}

fn check(program: &str, output: Output) -> Result<Vec<u8>, ResolverError> {
    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(ResolverError::Command {
            program: program.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
