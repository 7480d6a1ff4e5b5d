use std::path::PathBuf;
use std::process::Command;

use crate::error::{PluginCtlError, Result};

/// Captured result of a single external process invocation.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Combined stdout and stderr, in that order.
    pub output: String,
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
    success: bool,
}

impl ProcessOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.success
    }
}

/// Runner for the external `git` binary, bound to a working directory.
///
/// pluginctl deliberately shells out to git rather than linking a git
/// library: every operation is "run process, capture combined output, check
/// exit code", and the captured output is echoed to the operator verbatim.
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Creates a runner executing git inside `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        GitCli {
            work_dir: work_dir.into(),
        }
    }

    /// Runs `git` with the given arguments and captures its output.
    ///
    /// A spawn failure (git missing from PATH, not executable) is an error.
    /// A non-zero exit status is NOT an error at this layer; callers that
    /// need one should use [`run_checked`](Self::run_checked). This keeps
    /// "diff found differences" distinguishable from "could not run git".
    pub fn run(&self, args: &[&str]) -> Result<ProcessOutput> {
        let out = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|e| {
                PluginCtlError::process(format!("failed to run 'git {}': {}", args.join(" "), e))
            })?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(ProcessOutput {
            output,
            code: out.status.code(),
            success: out.status.success(),
        })
    }

    /// Runs `git` and treats a non-zero exit status as a failure.
    ///
    /// The error carries the step's captured output so the operator sees
    /// what git reported.
    pub fn run_checked(&self, args: &[&str]) -> Result<String> {
        let result = self.run(args)?;
        if result.success() {
            Ok(result.output)
        } else {
            Err(PluginCtlError::process(format!(
                "'git {}' exited with status {}:\n{}",
                args.join(" "),
                result
                    .code
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
                result.output
            )))
        }
    }

    /// Returns the name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let out = self.run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Diffs the given paths against the index, returning the diff text.
    ///
    /// git exits non-zero in some difference cases; that is diff content,
    /// not a failure. Only a launch failure propagates as an error.
    pub fn diff(&self, paths: &[String]) -> Result<String> {
        let mut args = vec!["diff", "--"];
        args.extend(paths.iter().map(String::as_str));
        let result = self.run(&args)?;
        Ok(result.output)
    }
}
