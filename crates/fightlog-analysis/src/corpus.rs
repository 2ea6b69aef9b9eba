//! Corpus loading from a directory tree of fight-log files
//!
//! Walks a root directory recursively, collecting every file with a `.json`
//! extension as a candidate fight record. Files that fail to open or parse
//! are skipped and recorded with a reason; the load never aborts on a bad
//! file.
//!
//! The *source folder* of a sample is the name of the file's parent
//! directory. Batches of simulation runs are grouped one batch per directory,
//! so the label identifies which batch a fight came from; it is used for
//! coloring plots and for per-source breakdowns in cluster summaries.

use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::record::FightRecord;

/// One successfully parsed fight record with its provenance.
#[derive(Debug, Clone)]
pub struct FightSample {
    /// Path of the JSON file this record was parsed from
    pub path: PathBuf,
    /// Source-folder label (the file's parent directory name)
    pub source: String,
    /// The parsed record
    pub record: FightRecord,
}

/// A file that was found during the walk but could not be used.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The loaded corpus: parsed samples plus the files that were skipped.
#[derive(Debug, Clone)]
pub struct FightCorpus {
    pub samples: Vec<FightSample>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadCorpusError {
    #[display("corpus root is not a directory: {}", path.display())]
    RootNotADirectory { path: PathBuf },
}

impl FightCorpus {
    /// Walk `root` and parse every `.json` file found.
    ///
    /// Unreadable directory entries and unparseable files are skipped and
    /// recorded in [`FightCorpus::skipped`]. The walk order is sorted by file
    /// name so repeated runs over the same corpus produce identical sample
    /// ordering.
    ///
    /// # Errors
    ///
    /// Returns an error only if `root` itself is not a directory.
    pub fn load(root: &Path) -> Result<Self, LoadCorpusError> {
        if !root.is_dir() {
            return Err(LoadCorpusError::RootNotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut samples = vec![];
        let mut skipped = vec![];
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match read_record(path) {
                Ok(record) => samples.push(FightSample {
                    path: path.to_path_buf(),
                    source: source_label(path),
                    record,
                }),
                Err(reason) => skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason,
                }),
            }
        }

        Ok(Self { samples, skipped })
    }

    /// Number of parsed samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample counts per source-folder label, sorted by label.
    #[must_use]
    pub fn source_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for sample in &self.samples {
            *counts.entry(sample.source.clone()).or_insert(0) += 1;
        }
        counts
    }
}

fn read_record(path: &Path) -> Result<FightRecord, String> {
    let file = File::open(path).map_err(|err| err.to_string())?;
    serde_json::from_reader(BufReader::new(file)).map_err(|err| err.to_string())
}

/// Source-folder label of a record: the parent directory's name.
///
/// For files placed directly under the scan root this is the root directory's
/// own name, so every sample carries a label.
fn source_label(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map_or_else(|| String::from("corpus"), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn valid_record_json(time_steps: f64) -> String {
        format!(
            r#"{{
                "endLog": {{
                    "winner": 2,
                    "totalTimeSteps": {time_steps},
                    "totalActions": 10,
                    "totalDamageOut": 100,
                    "player1DamageOut": 60,
                    "player1TotalActions": 6,
                    "player2DamageOut": 40,
                    "player2TotalActions": 4
                }}
            }}"#
        )
    }

    #[test]
    fn test_load_walks_subdirectories_and_skips_bad_files() {
        let root = tempfile::tempdir().unwrap();
        let batch_a = root.path().join("batch_a");
        let batch_b = root.path().join("batch_b");
        fs::create_dir(&batch_a).unwrap();
        fs::create_dir(&batch_b).unwrap();

        fs::write(batch_a.join("run_1.json"), valid_record_json(100.0)).unwrap();
        fs::write(batch_a.join("run_2.json"), valid_record_json(200.0)).unwrap();
        fs::write(batch_b.join("run_1.json"), valid_record_json(300.0)).unwrap();
        fs::write(batch_b.join("broken.json"), "{ not json").unwrap();
        fs::write(batch_b.join("notes.txt"), "ignored").unwrap();

        let corpus = FightCorpus::load(root.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.skipped.len(), 1);
        assert!(corpus.skipped[0].path.ends_with("broken.json"));

        let counts = corpus.source_counts();
        assert_eq!(counts.get("batch_a"), Some(&2));
        assert_eq!(counts.get("batch_b"), Some(&1));
    }

    #[test]
    fn test_files_under_root_take_root_name_as_source() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("run.json"), valid_record_json(50.0)).unwrap();

        let corpus = FightCorpus::load(root.path()).unwrap();
        assert_eq!(corpus.len(), 1);
        let root_name = root.path().file_name().unwrap().to_string_lossy();
        assert_eq!(corpus.samples[0].source, root_name);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = FightCorpus::load(Path::new("/nonexistent/fightlog/corpus"));
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_corpus_loads_with_zero_samples() {
        let root = tempfile::tempdir().unwrap();
        let corpus = FightCorpus::load(root.path()).unwrap();
        assert!(corpus.is_empty());
        assert!(corpus.skipped.is_empty());
    }
}
