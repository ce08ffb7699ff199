use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no stdout captured for `{command}`")]
    MissingStdout { command: String },
    #[error("failed to read output of `{command}`: {source}")]
    Read {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Domain interface for running a system command line.
///
/// Implementations return the captured standard output with lines joined by
/// `\n` and surrounding whitespace trimmed. The exit status is not inspected.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> Result<String, CommandError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        (**self).run(command)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        (**self).run(command)
    }
}

/// Runs `command`, reading any failure as empty output.
pub fn query(runner: &dyn CommandRunner, command: &str) -> String {
    match runner.run(command) {
        Ok(output) => {
            log::debug!("`{command}` -> {output:?}");
            output
        }
        Err(e) => {
            log::debug!("{e}");
            String::new()
        }
    }
}

/// Whether the output of `command` contains `needle`, ignoring case.
pub fn query_contains(runner: &dyn CommandRunner, command: &str, needle: &str) -> bool {
    query(runner, command)
        .to_lowercase()
        .contains(&needle.to_lowercase())
}
