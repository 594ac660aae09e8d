//! Subprocess execution.
//!
//! Every external program (agvtool, doxygen, make, osascript) is started
//! through [`CommandRunner`], so tests can swap in a fake that records
//! invocations and replays canned output.

use crate::error::{PagesError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::debug;

/// A single program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path, looked up on `PATH`
    pub program: String,
    pub args: Vec<String>,
    /// Data written to the child's stdin, which is then closed
    pub stdin: Option<String>,
    /// Working directory; inherits ours when `None`
    pub cwd: Option<PathBuf>,
    /// Echo stdout line by line to our own stdout while capturing it.
    /// Bytes are passed through unchanged.
    pub relay: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
            cwd: None,
            relay: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn relay(mut self, relay: bool) -> Self {
        self.relay = relay;
        self
    }

    /// Program and arguments as one line, for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completed {
    /// Exit code, `None` if the child was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    /// Empty for relayed invocations, whose stderr goes straight to ours
    pub stderr: String,
}

impl Completed {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stdout and stderr together, for error reports.
    pub fn combined_output(&self) -> String {
        match (self.stdout.trim_end(), self.stderr.trim_end()) {
            (out, "") => out.to_string(),
            ("", err) => err.to_string(),
            (out, err) => format!("{}\n{}", out, err),
        }
    }

    /// Turn a non-zero exit into [`PagesError::ToolFailed`].
    pub fn check(self, program: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PagesError::tool_failed(
                program,
                self.code,
                self.combined_output(),
            ))
        }
    }
}

/// Runs external programs to completion.
///
/// Implementations report spawn failures as errors but never inspect the exit
/// status; callers decide what a non-zero exit means.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<Completed>;
}

/// Runs programs on the host with `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Completed> {
        debug!(command = %invocation.display(), cwd = ?invocation.cwd, "spawning");

        let program = invocation.program.as_str();
        let mut cmd = Command::new(program);
        cmd.args(&invocation.args)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(if invocation.relay {
                Stdio::inherit()
            } else {
                Stdio::piped()
            })
            .kill_on_drop(true);

        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| PagesError::spawn_failed(program, e))?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().ok_or_else(|| {
            PagesError::spawn_failed(
                program,
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Failed to capture stdout"),
            )
        })?;
        let stderr = child.stderr.take();

        // stdin is fed concurrently with draining stdout and stderr.
        let feed = async {
            // `pipe` is dropped at the end of this block, closing the child's stdin
            let (Some(mut pipe), Some(input)) = (stdin, invocation.stdin.as_deref()) else {
                return Ok::<_, PagesError>(());
            };
            match pipe.write_all(input.as_bytes()).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                    debug!(program, "child closed stdin before reading all input");
                    Ok(())
                }
                Err(e) => Err(PagesError::spawn_failed(program, e)),
            }
        };

        let drain_stdout = async {
            let mut reader = BufReader::new(stdout);
            let mut relay = invocation.relay.then(tokio::io::stdout);
            let mut captured = Vec::new();
            let mut line = Vec::new();
            loop {
                line.clear();
                let read = reader
                    .read_until(b'\n', &mut line)
                    .await
                    .map_err(|e| PagesError::spawn_failed(program, e))?;
                if read == 0 {
                    break;
                }
                if let Some(out) = relay.as_mut() {
                    out.write_all(&line)
                        .await
                        .map_err(|e| PagesError::io("<stdout>", e))?;
                }
                captured.extend_from_slice(&line);
            }
            if let Some(out) = relay.as_mut() {
                out.flush().await.map_err(|e| PagesError::io("<stdout>", e))?;
            }
            Ok::<_, PagesError>(captured)
        };

        let drain_stderr = async {
            let mut captured = Vec::new();
            if let Some(mut pipe) = stderr {
                pipe.read_to_end(&mut captured)
                    .await
                    .map_err(|e| PagesError::spawn_failed(program, e))?;
            }
            Ok::<_, PagesError>(captured)
        };

        let ((), stdout, stderr) = tokio::try_join!(feed, drain_stdout, drain_stderr)?;

        let status = child
            .wait()
            .await
            .map_err(|e| PagesError::spawn_failed(program, e))?;

        Ok(Completed {
            code: status.code(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_builder() {
        let inv = Invocation::new("agvtool")
            .args(["mvers", "-terse1"])
            .current_dir("/tmp")
            .relay(true);
        assert_eq!(inv.display(), "agvtool mvers -terse1");
        assert_eq!(inv.cwd.as_deref(), Some(Path::new("/tmp")));
        assert!(inv.relay);
        assert!(inv.stdin.is_none());
    }

    #[test]
    fn test_completed_check() {
        assert!(Completed::success("ok").check("make").is_ok());

        let failed = Completed {
            code: Some(1),
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
        };
        match failed.check("make") {
            Err(PagesError::ToolFailed { program, output, .. }) => {
                assert_eq!(program, "make");
                assert_eq!(output, "out\nerr");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_pipes_stdin() {
        let completed = SystemRunner
            .run(&Invocation::new("cat").stdin("hello\n"))
            .await
            .unwrap();
        assert!(completed.is_success());
        assert_eq!(completed.stdout, "hello\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_relays_lines() {
        let completed = SystemRunner
            .run(&Invocation::new("cat").stdin("one\ntwo").relay(true))
            .await
            .unwrap();
        assert_eq!(completed.stdout, "one\ntwo");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_relays_non_utf8_output() {
        let completed = SystemRunner
            .run(
                &Invocation::new("sh")
                    .args(["-c", "printf 'caf\\351\\n'"])
                    .relay(true),
            )
            .await
            .unwrap();
        assert!(completed.is_success());
        assert_eq!(completed.stdout, "caf\u{FFFD}\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_streams_large_stdin() {
        let input = "x".repeat(1 << 20);
        for relay in [false, true] {
            let completed = tokio::time::timeout(
                std::time::Duration::from_secs(30),
                SystemRunner.run(&Invocation::new("cat").stdin(input.clone()).relay(relay)),
            )
            .await
            .expect("cat should not stall on a full pipe")
            .unwrap();
            assert!(completed.is_success());
            assert_eq!(completed.stdout.len(), input.len());
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_ignores_unread_stdin() {
        let completed = SystemRunner
            .run(&Invocation::new("true").stdin("x".repeat(1 << 20)))
            .await
            .unwrap();
        assert!(completed.is_success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_system_runner_reports_exit_code() {
        let completed = SystemRunner
            .run(&Invocation::new("sh").args(["-c", "echo bad >&2; exit 3"]))
            .await
            .unwrap();
        assert_eq!(completed.code, Some(3));
        assert_eq!(completed.stderr, "bad\n");
    }

    #[tokio::test]
    async fn test_system_runner_missing_program() {
        let err = SystemRunner
            .run(&Invocation::new("definitely-not-a-real-tool-xcode-pages"))
            .await
            .unwrap_err();
        assert!(matches!(err, PagesError::ToolNotFound { .. }));
    }
}
