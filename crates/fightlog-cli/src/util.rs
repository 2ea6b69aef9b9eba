use std::{fs, path::Path};

use anyhow::Context as _;
use fightlog_analysis::{corpus::FightCorpus, feature::FeatureMatrix};

/// Load the corpus, reporting progress and skipped files to stderr.
pub(crate) fn load_corpus(root: &Path) -> anyhow::Result<FightCorpus> {
    eprintln!("Scanning {} for fight records...", root.display());
    let corpus = FightCorpus::load(root)
        .with_context(|| format!("Failed to scan corpus root {}", root.display()))?;
    eprintln!(
        "Loaded {} fight records ({} files skipped)",
        corpus.len(),
        corpus.skipped.len()
    );
    for skipped in &corpus.skipped {
        eprintln!("  skipping {}: {}", skipped.path.display(), skipped.reason);
    }
    Ok(corpus)
}

/// Load the corpus and flatten it into a feature matrix.
///
/// Fails if the corpus contains no parseable record, since every analysis
/// command needs at least one row.
pub(crate) fn load_matrix(root: &Path) -> anyhow::Result<(FightCorpus, FeatureMatrix)> {
    let corpus = load_corpus(root)?;
    anyhow::ensure!(
        !corpus.is_empty(),
        "no parseable fight records under {}",
        root.display()
    );
    let matrix = FeatureMatrix::from_corpus(&corpus);
    Ok((corpus, matrix))
}

/// Write a text file, creating parent directories as needed.
pub(crate) fn write_text_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
