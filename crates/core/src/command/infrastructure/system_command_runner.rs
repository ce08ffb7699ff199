use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

use crate::command::domain::command_runner::{CommandError, CommandRunner};

/// Runs command lines through the platform shell.
///
/// `cmd /C` on Windows, `sh -c` elsewhere, so pipes and `$VAR` expansion in
/// the probe commands behave as written. Stderr is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell(command: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;

            // Raw so the registry path keeps its quotes unescaped for cmd.
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").raw_arg(command);
            cmd
        }
        #[cfg(not(target_os = "windows"))]
        {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        let mut child = Self::shell(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CommandError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| CommandError::MissingStdout {
            command: command.to_string(),
        })?;

        let lines = read_lines_lossy(BufReader::new(stdout));
        // Reap the child even if reading failed.
        let status = child.wait();

        let lines = lines.map_err(|e| CommandError::Read {
            command: command.to_string(),
            source: e,
        })?;
        status.map_err(|e| CommandError::Wait {
            command: command.to_string(),
            source: e,
        })?;

        Ok(lines.join("\n").trim().to_string())
    }
}

/// Splits on `\n` (dropping a trailing `\r`) and decodes each line lossily,
/// so one non-UTF-8 byte cannot discard the rest of the output.
fn read_lines_lossy<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(lines);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
}
