use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use tracing::{debug, trace, warn};

/// Result of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes shell command lines on behalf of the pipeline.
pub trait CommandRunner {
    /// Whether `tool` resolves on PATH.
    fn tool_available(&self, tool: &str) -> bool;

    /// Run `command` to completion. `Err` only when it could not be started.
    fn run(&self, command: &str) -> io::Result<CommandOutput>;
}

/// Runs commands through `sh -c` on the local machine.
///
/// Stdout is inherited. Stderr is echoed line by line as it arrives and
/// captured for the caller.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn tool_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }

    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        debug!("exec: {}", command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()?;

        let captured = match child.stderr.take() {
            Some(stderr) => drain_stderr(BufReader::new(stderr), &mut io::stderr()),
            None => String::new(),
        };

        let status = child.wait()?;
        // No code means the process was killed by a signal.
        let exit_code = status.code().unwrap_or(-1);

        debug!("exit {}: {}", exit_code, command);
        trace!("stderr: {}", captured.trim());

        Ok(CommandOutput {
            exit_code,
            stderr: captured,
        })
    }
}

/// Echo `reader` to `terminal` line by line and return everything read.
///
/// A read error ends the stream but keeps what was captured so far, so
/// the caller still reaps the child.
fn drain_stderr<R: BufRead>(mut reader: R, terminal: &mut dyn Write) -> String {
    let mut captured = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                let _ = terminal.write_all(text.as_bytes());
                captured.push_str(&text);
            }
            Err(e) => {
                warn!("Stopped reading stderr: {}", e);
                break;
            }
        }
    }
    captured
}

#[cfg(test)]
pub mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;

    use super::{CommandOutput, CommandRunner};

    /// Records every command and answers with scripted outputs.
    /// Once the script runs out every command succeeds.
    pub struct FakeRunner {
        tool_present: bool,
        responses: RefCell<VecDeque<CommandOutput>>,
        issued: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub fn new(responses: Vec<CommandOutput>) -> Self {
            Self {
                tool_present: true,
                responses: RefCell::new(responses.into()),
                issued: RefCell::new(Vec::new()),
            }
        }

        pub fn without_tool() -> Self {
            Self {
                tool_present: false,
                ..Self::new(Vec::new())
            }
        }

        pub fn issued(&self) -> Vec<String> {
            self.issued.borrow().clone()
        }
    }

    pub fn exit(code: i32, stderr: &str) -> CommandOutput {
        CommandOutput {
            exit_code: code,
            stderr: stderr.to_string(),
        }
    }

    impl CommandRunner for FakeRunner {
        fn tool_available(&self, _tool: &str) -> bool {
            self.tool_present
        }

        fn run(&self, command: &str) -> io::Result<CommandOutput> {
            self.issued.borrow_mut().push(command.to_string());
            Ok(self.responses.borrow_mut().pop_front().unwrap_or_default())
        }
    }
}
