use std::path::Path;

use semver::Version;

use crate::error::Result;
use crate::git_ops::GitCli;
use crate::manifest;
use crate::ui;
use crate::version::{bump_version, parse_version, BumpMode};

/// How a bump workflow ended.
///
/// Declining the diff review is a deliberate soft exit, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// The bump was committed and pushed on the given release branch.
    Published { version: Version, branch: String },
    /// The operator declined the diff; nothing was committed.
    Declined,
}

/// Runs the end-to-end version-bump workflow.
///
/// Stages, in order: locate and parse the manifest, compute the next
/// version, write the manifest back and regenerate derived sources, show
/// the operator a diff of the touched files, ask for confirmation, then
/// branch/commit/push. The first failing stage aborts the rest.
///
/// The confirmation gate is injected so non-interactive callers (and tests)
/// can decide without a terminal. Declining, or a prompt read failure, ends
/// the workflow successfully with [`BumpOutcome::Declined`].
///
/// Git steps are not idempotent or resumable; a failure partway (say, after
/// branch creation but before push) leaves the repository in an intermediate
/// state for the operator to clean up.
pub fn run_bump(
    start_dir: &Path,
    mode: BumpMode,
    confirm: &mut dyn FnMut(&str) -> Result<bool>,
) -> Result<BumpOutcome> {
    let (mut manifest, root) = manifest::find_manifest(start_dir)?;

    let old_version = parse_version(&manifest.version)?;
    let new_version = bump_version(&old_version, mode);

    manifest.version = new_version.to_string();
    manifest::write_manifest(&manifest, &root)?;
    manifest::apply_manifest(&manifest, &root)?;

    let files = manifest::generated_files(&manifest);

    let git = GitCli::new(&root);

    // Non-zero exit here means the diff has content, not that git failed.
    let diff = git.diff(&files)?;
    print!("{}", diff);

    let confirmed = confirm("Does the diff look good").unwrap_or(false);
    if !confirmed {
        println!("Diff wasn't confirmed. Exiting.");
        return Ok(BumpOutcome::Declined);
    }

    let branch = format!("release_v{}", new_version);
    let original_branch = git.current_branch()?;

    let commit_message = format!("Bump version to {}", new_version);
    let mut add_args = vec!["add"];
    add_args.extend(files.iter().map(String::as_str));

    let steps: Vec<Vec<&str>> = vec![
        vec!["checkout", "-b", &branch],
        add_args,
        vec!["commit", "-m", &commit_message],
        vec!["push", "--set-upstream", "origin", &branch],
        vec!["checkout", &original_branch],
    ];

    for step in &steps {
        let output = git.run_checked(step)?;
        print!("{}", output);
    }

    ui::display_success(&format!(
        "Bumped version {} -> {} on branch {}",
        old_version, new_version, branch
    ));

    Ok(BumpOutcome::Published {
        version: new_version,
        branch,
    })
}
