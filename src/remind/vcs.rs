//! Optional git adapter for the notes tree.
//!
//! Every operation shells out to a `git` executable found on `$PATH`; no
//! executable means no version control rather than a failed run. Mutating
//! operations are fire-and-forget: exit status comes back as a bool, output
//! is discarded except for the tracked-status query. `commit` is the one
//! interactive call, inheriting the terminal so git can open the editor for
//! the message.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct Git {
    program: PathBuf,
    root: PathBuf,
}

impl Git {
    /// Locate a usable git executable. `None` degrades to "no version
    /// control".
    pub fn locate(root: &Path) -> Option<Self> {
        let program = find_in_path("git")?;
        Some(Self {
            program,
            root: root.to_path_buf(),
        })
    }

    fn silent<I, S>(&self, args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    pub fn is_initialized(&self) -> bool {
        self.silent(["rev-parse", "--git-dir"])
    }

    pub fn initialize(&self) -> bool {
        self.silent(["init"])
    }

    pub fn add(&self, path: &Path) -> bool {
        self.silent([OsStr::new("add"), self.relative(path).as_os_str()])
    }

    pub fn rm(&self, path: &Path, recursive: bool) -> bool {
        let mut args = vec![OsStr::new("rm")];
        if recursive {
            args.push(OsStr::new("-r"));
        }
        args.push(self.relative(path).as_os_str());
        self.silent(args)
    }

    /// Interactive: inherits the terminal and blocks until git (and its
    /// editor) exits. The outcome is deliberately ignored, an aborted commit
    /// is git's business.
    pub fn commit(&self) {
        let _ = Command::new(&self.program)
            .arg("commit")
            .current_dir(&self.root)
            .status();
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        Command::new(&self.program)
            .args([OsStr::new("ls-files"), self.relative(path).as_os_str()])
            .current_dir(&self.root)
            .output()
            .map(|output| !output.stdout.is_empty())
            .unwrap_or(false)
    }

    pub fn is_modified(&self, path: &Path) -> bool {
        !self.silent([
            OsStr::new("diff"),
            OsStr::new("--exit-code"),
            OsStr::new("--name-only"),
            self.relative(path).as_os_str(),
        ])
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in(program, &path_var)
}

fn find_in(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    for dir in env::split_paths(path_var) {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
