//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use xcode_pages::{CommandRunner, Completed, Environment, Invocation, Result};

/// A recorded call, with the script body when the script host was invoked.
#[derive(Debug, Clone)]
pub struct Call {
    pub invocation: Invocation,
    pub script: Option<String>,
}

/// Fake runner: canned replies keyed by command line, success otherwise.
#[derive(Default)]
pub struct ScriptedRunner {
    replies: Mutex<HashMap<String, Completed>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedRunner {
    /// Runner answering agvtool with the given versions.
    pub fn with_versions(marketing: &str, build: &str) -> Self {
        let runner = Self::default();
        runner.reply("agvtool mvers -terse1", Completed::success(format!("{}\n", marketing)));
        runner.reply("agvtool vers -terse", Completed::success(format!("{}\n", build)));
        runner
    }

    pub fn reply(&self, command_line: &str, completed: Completed) {
        self.replies.lock().insert(command_line.to_string(), completed);
    }

    pub fn fail(&self, command_line: &str, code: i32, stderr: &str) {
        self.reply(
            command_line,
            Completed {
                code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.invocation.display()).collect()
    }

    pub fn find(&self, program: &str) -> Option<Call> {
        self.calls().into_iter().find(|c| c.invocation.program == program)
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Completed> {
        let script = if invocation.program == "osascript" {
            invocation.args.first().and_then(|p| fs::read_to_string(p).ok())
        } else {
            None
        };
        self.calls.lock().push(Call {
            invocation: invocation.clone(),
            script,
        });

        let reply = self.replies.lock().get(&invocation.display()).cloned();
        Ok(reply.unwrap_or_else(|| Completed::success("")))
    }
}

pub fn environment(pairs: &[(&str, &str)]) -> Environment {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}
