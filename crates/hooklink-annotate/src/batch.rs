//! Batch annotation of a docs directory.

use std::path::PathBuf;
use std::time::Instant;

use crate::links::{annotation_block, insert_after_first_newline};
use crate::slug::{hook_name, slugify};

/// Configuration for a batch annotation run.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Directory of generated hook docs to annotate
    pub dir: PathBuf,

    /// Base URL of the hook library's documentation site
    pub docs_base_url: String,

    /// Base URL of the hook library's source tree
    pub source_base_url: String,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs/hooks/effect"),
            docs_base_url: "https://ahooks.js.org/zh-CN/hooks".to_string(),
            source_base_url: "https://github.com/alibaba/hooks/blob/master/packages/hooks/src"
                .to_string(),
        }
    }
}

/// Result of a batch annotation run.
#[derive(Debug)]
pub struct BatchReport {
    /// Number of files annotated
    pub annotated: usize,

    /// Number of files written back unchanged (no newline to anchor on)
    pub unchanged: usize,

    /// Per-file failures
    pub failures: Vec<FileFailure>,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// A file that could not be annotated.
#[derive(Debug)]
pub struct FileFailure {
    /// Entry name within the docs directory
    pub name: String,

    /// What went wrong
    pub error: FileError,
}

/// Outcome of annotating a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The links block was inserted after the first line
    Annotated,
    /// The content had no newline; written back untouched
    Unchanged,
}

/// Errors that abort the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("Failed to read docs directory: {0}")]
    ListDir(String),
}

/// Errors isolated to a single file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Failed to read file: {0}")]
    Read(String),

    #[error("Failed to write file: {0}")]
    Write(String),

    #[error("Annotation task failed: {0}")]
    Task(String),
}

/// Batch annotator for a directory of generated hook docs.
pub struct BatchAnnotator {
    config: AnnotateConfig,
}

impl BatchAnnotator {
    /// Create a new batch annotator.
    pub fn new(config: AnnotateConfig) -> Self {
        Self { config }
    }

    /// Annotate every direct entry of the configured directory.
    ///
    /// A listing failure is fatal and nothing is written. Per-file failures
    /// are collected in the report and do not abort sibling files.
    pub async fn run(&self) -> Result<BatchReport, AnnotateError> {
        let start = Instant::now();

        let names = self.list_entries().await?;

        tracing::info!(
            "Found {} entries in {}",
            names.len(),
            self.config.dir.display()
        );

        // Each entry runs as an independent read -> transform -> write task;
        // completion order between files is unspecified.
        let mut handles = Vec::with_capacity(names.len());

        for name in names {
            let path = self.config.dir.join(&name);
            let task_name = name.clone();
            let docs_base_url = self.config.docs_base_url.clone();
            let source_base_url = self.config.source_base_url.clone();

            let handle = tokio::spawn(async move {
                annotate_file(path, task_name, docs_base_url, source_base_url).await
            });

            handles.push((name, handle));
        }

        let mut annotated = 0;
        let mut unchanged = 0;
        let mut failures = Vec::new();

        for (name, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(FileError::Task(e.to_string())),
            };

            match result {
                Ok(Outcome::Annotated) => {
                    tracing::debug!("Annotated {}", name);
                    annotated += 1;
                }
                Ok(Outcome::Unchanged) => {
                    tracing::debug!("No newline in {}, left untouched", name);
                    unchanged += 1;
                }
                Err(error) => {
                    tracing::warn!("Failed to annotate {}: {}", name, error);
                    failures.push(FileFailure { name, error });
                }
            }
        }

        let duration = start.elapsed();

        Ok(BatchReport {
            annotated,
            unchanged,
            failures,
            duration_ms: duration.as_millis() as u64,
        })
    }

    /// List the direct entries of the docs directory.
    ///
    /// Every entry is treated as a text file; there is no recursion into
    /// subdirectories.
    async fn list_entries(&self) -> Result<Vec<String>, AnnotateError> {
        let dir = &self.config.dir;

        let mut read_dir = tokio::fs::read_dir(dir)
            .await
            .map_err(|e| AnnotateError::ListDir(format!("{}: {}", dir.display(), e)))?;

        let mut names = Vec::new();

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| AnnotateError::ListDir(format!("{}: {}", dir.display(), e)))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }
}

/// Annotate a single file: read, insert the links block, write back.
async fn annotate_file(
    path: PathBuf,
    name: String,
    docs_base_url: String,
    source_base_url: String,
) -> Result<Outcome, FileError> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| FileError::Read(format!("{}: {}", path.display(), e)))?;

    let hook = hook_name(&name);
    let block = annotation_block(&docs_base_url, &source_base_url, &slugify(&hook), &hook);

    let (updated, outcome) = match insert_after_first_newline(&content, &block) {
        Some(updated) => (updated, Outcome::Annotated),
        // No newline to anchor on: the original content goes back untouched.
        None => (content, Outcome::Unchanged),
    };

    tokio::fs::write(&path, updated)
        .await
        .map_err(|e| FileError::Write(format!("{}: {}", path.display(), e)))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    fn config_for(dir: &Path) -> AnnotateConfig {
        AnnotateConfig {
            dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn annotates_hook_docs() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("effect");
        fs::create_dir_all(&docs).unwrap();

        fs::write(
            docs.join("useMount.md"),
            "# useMount\n\nRuns an effect on mount.\n",
        )
        .unwrap();
        fs::write(
            docs.join("useUnmount.md"),
            "# useUnmount\n\nRuns a cleanup on unmount.\n",
        )
        .unwrap();

        let report = BatchAnnotator::new(config_for(&docs)).run().await.unwrap();

        assert_eq!(report.annotated, 2);
        assert_eq!(report.unchanged, 0);
        assert!(report.failures.is_empty());

        let content = fs::read_to_string(docs.join("useMount.md")).unwrap();
        assert!(content.starts_with("# useMount\n\n- [Documentation]"));
        assert!(content.contains("(https://ahooks.js.org/zh-CN/hooks/use-mount)"));
        assert!(content.contains("/useMount/index.ts)"));
        assert!(content.ends_with("Runs an effect on mount.\n"));

        let content = fs::read_to_string(docs.join("useUnmount.md")).unwrap();
        assert!(content.contains("(https://ahooks.js.org/zh-CN/hooks/use-unmount)"));
    }

    #[tokio::test]
    async fn missing_directory_is_fatal() {
        let temp = tempdir().unwrap();

        let result = BatchAnnotator::new(config_for(&temp.path().join("nope")))
            .run()
            .await;

        assert!(matches!(result, Err(AnnotateError::ListDir(_))));
    }

    #[tokio::test]
    async fn file_without_newline_left_untouched() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("effect");
        fs::create_dir_all(&docs).unwrap();

        let original = "# useToggle, all on one line with no trailing break";
        fs::write(docs.join("useToggle.md"), original).unwrap();

        let report = BatchAnnotator::new(config_for(&docs)).run().await.unwrap();

        assert_eq!(report.annotated, 0);
        assert_eq!(report.unchanged, 1);
        assert_eq!(
            fs::read_to_string(docs.join("useToggle.md")).unwrap(),
            original
        );
    }

    #[tokio::test]
    async fn second_run_inserts_second_block() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("effect");
        fs::create_dir_all(&docs).unwrap();

        fs::write(docs.join("useMount.md"), "# useMount\n\nBody.\n").unwrap();

        let annotator = BatchAnnotator::new(config_for(&docs));
        annotator.run().await.unwrap();
        annotator.run().await.unwrap();

        let content = fs::read_to_string(docs.join("useMount.md")).unwrap();
        assert_eq!(content.matches("- [Documentation](").count(), 2);
    }

    #[tokio::test]
    async fn unreadable_entry_does_not_abort_siblings() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("effect");
        fs::create_dir_all(&docs).unwrap();

        // A subdirectory is listed like any other entry but fails its read.
        fs::create_dir_all(docs.join("nested")).unwrap();
        fs::write(docs.join("useToggle.md"), "# useToggle\n\nBody.\n").unwrap();

        let report = BatchAnnotator::new(config_for(&docs)).run().await.unwrap();

        assert_eq!(report.annotated, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "nested");
        assert!(matches!(report.failures[0].error, FileError::Read(_)));

        let content = fs::read_to_string(docs.join("useToggle.md")).unwrap();
        assert!(content.contains("- [Documentation]("));
    }
}
