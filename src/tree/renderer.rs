//! TreeRenderer - validates the root and walks the tree depth-first

use std::io;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::*;

use crate::error::TreeError;

use super::config::RenderConfig;
use super::entry::DirEntry;
use super::line::{Line, child_prefix};
use super::traversal::{ScanOutcome, Traversal};

/// The outcome of visiting one directory: its children, or the single line
/// that replaces them.
type Scanned = Result<Vec<DirEntry>, Line>;

/// Receives lines in output order.
pub trait LineSink {
    fn emit(&mut self, line: &Line) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl LineSink for Vec<Line> {
    fn emit(&mut self, line: &Line) -> io::Result<()> {
        self.push(line.clone());
        Ok(())
    }
}

/// Pending work for the sequential walk.
enum Work {
    Visit { path: PathBuf, prefix: String },
    Emit(Line),
}

/// Renders a bounded tree of a filesystem subtree.
///
/// The sequential walk keeps its state on an explicit work stack, so very
/// deep trees do not grow the native call stack. With `workers != 1`, sibling
/// subtrees are scanned on a rayon pool and reassembled in display order;
/// the output is identical either way.
pub struct TreeRenderer {
    config: RenderConfig,
    traversal: Traversal,
    workers: usize,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let traversal = Traversal::new(&config);
        Self {
            config,
            traversal,
            workers: 1,
        }
    }

    /// Number of workers for sibling scans.
    /// 0 = rayon's global pool, 1 = sequential, N = dedicated pool of N threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `root` into display lines.
    pub fn render(&self, root: &Path) -> Result<Vec<String>, TreeError> {
        let mut lines = Vec::new();
        self.render_into(root, &mut lines)?;
        Ok(lines)
    }

    /// Render `root` into `sink`.
    ///
    /// The root is validated before anything is emitted, so a missing root
    /// leaves the sink untouched.
    pub fn render_into<S: LineSink>(&self, root: &Path, sink: &mut S) -> Result<(), TreeError> {
        let (path, is_dir) = resolve_root(root)?;
        self.emit_tree(path, is_dir, sink)?;
        Ok(())
    }

    fn emit_tree<S: LineSink>(&self, path: PathBuf, is_dir: bool, sink: &mut S) -> io::Result<()> {
        sink.emit(&Line::Header {
            path: path.clone(),
            is_dir,
        })?;

        if is_dir {
            let scan = |dir: &Path, prefix: &str| self.scan_lines(dir, prefix);
            if self.workers == 1 {
                self.walk_sequential(path, sink, &scan)?;
            } else {
                for line in self.walk_parallel(&path, &scan) {
                    sink.emit(&line)?;
                }
            }
        }

        sink.finish()
    }

    /// Depth-first pre-order walk driven by an explicit stack.
    fn walk_sequential<S, F>(&self, root: PathBuf, sink: &mut S, scan: &F) -> io::Result<()>
    where
        S: LineSink,
        F: Fn(&Path, &str) -> Scanned,
    {
        let mut stack = vec![Work::Visit {
            path: root,
            prefix: String::new(),
        }];

        while let Some(work) = stack.pop() {
            match work {
                Work::Emit(line) => sink.emit(&line)?,
                Work::Visit { path, prefix } => {
                    let entries = match scan(&path, &prefix) {
                        Ok(entries) => entries,
                        Err(line) => {
                            sink.emit(&line)?;
                            continue;
                        }
                    };

                    // Pushed in reverse so the first sibling pops first.
                    let total = entries.len();
                    for (i, entry) in entries.into_iter().enumerate().rev() {
                        let is_last = i + 1 == total;
                        if entry.is_dir {
                            stack.push(Work::Visit {
                                path: entry.path,
                                prefix: child_prefix(&prefix, is_last),
                            });
                        }
                        stack.push(Work::Emit(Line::Entry {
                            prefix: prefix.clone(),
                            name: entry.name,
                            is_dir: entry.is_dir,
                            is_last,
                        }));
                    }
                }
            }
        }

        Ok(())
    }

    /// Parallel walk. Uses a dedicated pool when a worker count is given,
    /// falling back to the global pool if the pool cannot be built.
    fn walk_parallel<F>(&self, root: &Path, scan: &F) -> Vec<Line>
    where
        F: Fn(&Path, &str) -> Scanned + Sync,
    {
        if self.workers == 0 {
            return self.subtree(root, "", scan);
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
        {
            Ok(pool) => pool.install(|| self.subtree(root, "", scan)),
            Err(e) => {
                log::debug!("falling back to global rayon pool: {}", e);
                self.subtree(root, "", scan)
            }
        }
    }

    /// Lines beneath `path`, with sibling subtrees computed in parallel.
    fn subtree<F>(&self, path: &Path, prefix: &str, scan: &F) -> Vec<Line>
    where
        F: Fn(&Path, &str) -> Scanned + Sync,
    {
        let entries = match scan(path, prefix) {
            Ok(entries) => entries,
            Err(line) => return vec![line],
        };

        let total = entries.len();
        entries
            .into_par_iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_last = i + 1 == total;
                let mut lines = vec![Line::Entry {
                    prefix: prefix.to_string(),
                    name: entry.name,
                    is_dir: entry.is_dir,
                    is_last,
                }];
                if entry.is_dir {
                    lines.extend(self.subtree(&entry.path, &child_prefix(prefix, is_last), scan));
                }
                lines
            })
            .flatten()
            .collect()
    }

    /// Scan one directory. Elided and failed directories become the single
    /// line that replaces their children.
    fn scan_lines(&self, path: &Path, prefix: &str) -> Scanned {
        match self.traversal.scan(path) {
            ScanOutcome::Listed(entries) => Ok(entries),
            ScanOutcome::Elided { counted } => {
                log::debug!(
                    "eliding {} ({} entries > threshold {})",
                    path.display(),
                    counted,
                    self.config.threshold
                );
                Err(Line::Elided {
                    prefix: prefix.to_string(),
                })
            }
            ScanOutcome::Failed(error) => Err(Line::Diagnostic {
                prefix: prefix.to_string(),
                error,
            }),
        }
    }
}

/// Resolve `root` to a normalized absolute path and stat it.
fn resolve_root(root: &Path) -> Result<(PathBuf, bool), TreeError> {
    let not_found = |source: io::Error| TreeError::PathNotFound {
        path: root.to_path_buf(),
        source,
    };
    let path = normalize(&std::path::absolute(root).map_err(not_found)?);
    let metadata = std::fs::metadata(&path).map_err(not_found)?;
    Ok((path, metadata.is_dir()))
}

/// Drop `.` and fold `..` into its parent, lexically. Symlinks are not
/// consulted, and `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
