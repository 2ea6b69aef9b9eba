use std::path::PathBuf;

use clap::Args;
use fightlog_analysis::{embedding, scaling};

use crate::{plot, report, util};

#[derive(Debug, Clone, Args)]
pub struct EmbedPcaArg {
    /// Directory tree containing fight record JSON files
    corpus: PathBuf,
    /// Output path for the scatter plot PNG
    #[clap(long, default_value = "pca_scatter.png")]
    plot: PathBuf,
    /// Project the raw metric values instead of standardized ones
    #[clap(long)]
    raw: bool,
    /// Also save the embedded coordinates as CSV
    #[clap(long)]
    coords_output: Option<PathBuf>,
}

pub fn run(arg: &EmbedPcaArg) -> anyhow::Result<()> {
    let (_corpus, matrix) = util::load_matrix(&arg.corpus)?;

    let records = if arg.raw {
        matrix.records.clone()
    } else {
        scaling::standardize(&matrix.records)?
    };
    let embedding = embedding::pca_2d(&records)?;

    let ratio = &embedding.explained_variance_ratio;
    println!(
        "Explained variance ratio: PC1 {:.3}, PC2 {:.3} (total {:.3})",
        ratio[0],
        ratio[1],
        ratio[0] + ratio[1]
    );

    let groups = plot::group_by_source(&embedding.coords, &matrix.sources);
    plot::render_scatter(
        &arg.plot,
        "PCA embedding of fight records",
        &format!("PC1 ({:.3})", ratio[0]),
        &format!("PC2 ({:.3})", ratio[1]),
        &groups,
    )?;
    println!("Scatter plot saved to: {}", arg.plot.display());

    if let Some(coords_output) = &arg.coords_output {
        report::save_coords_csv(coords_output, &matrix, &embedding.coords)?;
    }

    Ok(())
}
