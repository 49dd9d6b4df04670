// Python bridge
//
// Runs short programs under a Python interpreter and collects a single JSON
// result line from stdout. Everything else the framework prints is forwarded
// to the debug log (or, when streaming, straight to the terminal).

use serde::de::DeserializeOwned;
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::errors::FrameworkError;

/// Prefix marking the result line a bridge program prints
const RESULT_MARKER: &str = "@@yolokit ";

/// Interpreter used to reach the framework
#[derive(Debug, Clone)]
pub struct PythonBridge {
    interpreter: String,
}

impl PythonBridge {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    fn command(&self, program: &str, args: &[&OsStr]) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg("-c")
            .arg(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    fn unavailable(&self, source: std::io::Error) -> FrameworkError {
        FrameworkError::Unavailable {
            interpreter: self.interpreter.clone(),
            source,
        }
    }

    /// Run `program` to completion, capturing its output
    pub async fn run<T: DeserializeOwned>(
        &self,
        program: &str,
        args: &[&OsStr],
    ) -> Result<T, FrameworkError> {
        let output = self
            .command(program, args)
            .output()
            .await
            .map_err(|e| self.unavailable(e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        for line in stdout.lines().filter(|l| !l.starts_with(RESULT_MARKER)) {
            debug!("framework: {}", line);
        }
        for line in stderr.lines() {
            debug!("framework: {}", line);
        }

        if !output.status.success() {
            return Err(FrameworkError::Failed {
                status: output.status.to_string(),
                detail: last_error_line(&stderr),
            });
        }

        let payload = extract_result(&stdout).ok_or(FrameworkError::MissingResult)?;
        Ok(serde_json::from_str(payload)?)
    }

    /// Run `program` with its output echoed to the terminal as it arrives
    ///
    /// stderr is inherited; stdout is read line by line so the result line can be
    /// picked out.
    pub async fn run_streaming<T: DeserializeOwned>(
        &self,
        program: &str,
        args: &[&OsStr],
    ) -> Result<T, FrameworkError> {
        let mut cmd = self.command(program, args);
        cmd.stdout(Stdio::piped()).stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|e| self.unavailable(e))?;
        debug!("Framework subprocess spawned (PID: {:?})", child.id());

        // Lines are decoded lossily: framework progress output is not always UTF-8
        let mut payload = None;
        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut raw = Vec::new();
            loop {
                raw.clear();
                if reader.read_until(b'\n', &mut raw).await? == 0 {
                    break;
                }
                let decoded = String::from_utf8_lossy(&raw);
                let line = decoded.trim_end_matches(['\n', '\r']);
                match line.strip_prefix(RESULT_MARKER) {
                    Some(result) => payload = Some(result.trim().to_string()),
                    None => println!("{}", line),
                }
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(FrameworkError::Failed {
                status: status.to_string(),
                detail: "see framework output above".to_string(),
            });
        }

        let payload = payload.ok_or(FrameworkError::MissingResult)?;
        Ok(serde_json::from_str(&payload)?)
    }
}

/// Find the last result line in captured stdout
fn extract_result(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix(RESULT_MARKER))
        .map(str::trim)
}

/// Last non-empty stderr line; for a Python traceback this is the exception itself
fn last_error_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no error output")
        .to_string()
}
