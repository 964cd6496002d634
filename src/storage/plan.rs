// src/storage/plan.rs
// =============================================================================
// Turns a storage snapshot into a reviewable cleanup plan.
//
// plan() is a pure function: same snapshot in, same lines out, no I/O. The
// output is a shell script made of comments and rm/mv commands that the
// operator can read, edit and run by hand.
//
// Rust concepts:
// - Display: lets every line be printed with {} and turned into a String
// - let-else: early `continue`/`return` when a pattern does not match
// - Cow: borrow the path text when it needs no quoting, own it when it does
// =============================================================================

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::snapshot::{EntryKind, StorageSnapshot, GITHUB_DIR};

/// A command the operator may run by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `rm <path>`
    RemoveFile(PathBuf),
    /// `rm -rf <path>`
    RemoveDir(PathBuf),
    /// `mv <from> <to>`
    Move { from: PathBuf, to: PathBuf },
}

// Characters that never need quoting in a POSIX shell word
fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | ',' | '@' | '%' | '=')
}

// Wraps the path in single quotes if it contains anything a shell would
// interpret (spaces, `;`, `$`, globs, ...). Embedded quotes become '\''.
fn shell_quote(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if !text.is_empty() && text.chars().all(is_shell_safe) {
        text
    } else {
        Cow::Owned(format!("'{}'", text.replace('\'', r"'\''")))
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellCommand::RemoveFile(path) => write!(f, "rm {}", shell_quote(path)),
            ShellCommand::RemoveDir(path) => write!(f, "rm -rf {}", shell_quote(path)),
            ShellCommand::Move { from, to } => {
                write!(f, "mv {} {}", shell_quote(from), shell_quote(to))
            }
        }
    }
}

/// One line of the printed plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanLine {
    /// Printed as `# <text>`, informational only
    Comment(String),
    /// Printed as the shell command itself
    Command(ShellCommand),
}

impl fmt::Display for PlanLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanLine::Comment(text) => write!(f, "# {text}"),
            PlanLine::Command(command) => write!(f, "{command}"),
        }
    }
}

fn comment(text: impl Into<String>) -> PlanLine {
    PlanLine::Comment(text.into())
}

fn abnormal_file(path: PathBuf) -> [PlanLine; 2] {
    [
        comment(format!("meet an abnormal file: {}", path.display())),
        PlanLine::Command(ShellCommand::RemoveFile(path)),
    ]
}

pub fn plan(snapshot: &StorageSnapshot) -> Vec<PlanLine> {
    let mut lines = vec![comment("clean storage root dir")];
    plan_root(snapshot, &mut lines);

    lines.push(comment(format!("clean storage/{GITHUB_DIR}")));
    plan_github(snapshot, &mut lines);

    lines
}

// Host directories (github.com, gitlab.com, ...) have a dot in their name.
// Everything else at the root is leftover.
fn plan_root(snapshot: &StorageSnapshot, lines: &mut Vec<PlanLine>) {
    let mut kept = Vec::new();

    for entry in &snapshot.entries {
        if entry.name.contains('.') {
            kept.push(entry.name.as_str());
            continue;
        }

        let path = snapshot.root.join(&entry.name);
        match entry.kind {
            EntryKind::Dir => lines.push(PlanLine::Command(ShellCommand::RemoveDir(path))),
            EntryKind::File => lines.extend(abnormal_file(path)),
        }
    }

    lines.push(comment("after clean: "));
    lines.extend(kept.into_iter().map(|name| comment(format!("   {name}"))));
}

fn plan_github(snapshot: &StorageSnapshot, lines: &mut Vec<PlanLine>) {
    let github_path = snapshot.root.join(GITHUB_DIR);

    let Some(owners) = &snapshot.github else {
        lines.push(comment(format!("no {} directory, skipped", github_path.display())));
        return;
    };

    for owner in owners {
        let owner_path = github_path.join(&owner.name);

        if owner.kind == EntryKind::File {
            lines.extend(abnormal_file(owner_path));
            continue;
        }

        // A dangling symlink is listed but does not exist
        let siblings: HashSet<&str> = owner
            .children
            .iter()
            .filter(|child| child.exists)
            .map(|child| child.name.as_str())
            .collect();

        for child in &owner.children {
            let Some(bare) = child.name.strip_suffix(".git") else {
                continue;
            };

            let path = owner_path.join(&child.name);
            let command = if siblings.contains(bare) {
                ShellCommand::RemoveDir(path)
            } else {
                ShellCommand::Move {
                    from: path,
                    to: owner_path.join(bare),
                }
            };
            lines.push(PlanLine::Command(command));
        }
    }
}

/// Renders the plan as a shell script, one line per entry.
///
/// Paths containing shell metacharacters are single-quoted, so a directory
/// named `a b` or `x;y` cannot turn a reviewed `rm` into another command.
pub fn render(lines: &[PlanLine]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
