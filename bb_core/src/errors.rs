use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    BrewNotFound {
        tried: Vec<String>,
    },
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
    CommandTimeout {
        command: String,
        timeout: Duration,
    },
    Spawn {
        command: String,
        message: String,
    },
    MalformedOutput {
        message: String,
    },
    InvalidServiceName {
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BrewNotFound { tried } => {
                write!(f, "brew executable not found")?;
                if !tried.is_empty() {
                    write!(f, " (tried: {})", tried.join(", "))?;
                }
                write!(
                    f,
                    "\n  hint: install Homebrew or pass --brew <path> to point at it"
                )
            }
            Error::CommandFailed {
                command,
                code,
                output,
            } => {
                match code {
                    Some(code) => write!(f, "'{}' exited with status {}", command, code)?,
                    None => write!(f, "'{}' was terminated by a signal", command)?,
                }
                let output = output.trim();
                if !output.is_empty() {
                    write!(f, "\n  output: {}", output)?;
                }
                Ok(())
            }
            Error::CommandTimeout { command, timeout } => {
                write!(
                    f,
                    "'{}' did not finish within {:?}\n  hint: brew may be waiting on a lock or the network; raise --timeout if this persists",
                    command, timeout
                )
            }
            Error::Spawn { command, message } => {
                write!(f, "failed to run '{}': {}", command, message)
            }
            Error::MalformedOutput { message } => {
                write!(
                    f,
                    "unexpected output from brew: {}\n  hint: run 'brew doctor' to check the installation",
                    message
                )
            }
            Error::InvalidServiceName { name } => {
                write!(
                    f,
                    "invalid service name '{}'\n  hint: pass the formula name, e.g. 'redis'",
                    name
                )
            }
        }
    }
}

impl std::error::Error for Error {}
