use std::path::PathBuf;

use clap::Args;
use fightlog_analysis::{
    embedding::{self, TsneSettings},
    scaling,
};

use crate::{plot, report, util};

#[derive(Debug, Clone, Args)]
pub struct EmbedTsneArg {
    /// Directory tree containing fight record JSON files
    corpus: PathBuf,
    /// Output path for the scatter plot PNG
    #[clap(long, default_value = "tsne_scatter.png")]
    plot: PathBuf,
    /// Effective number of neighbors per point
    #[clap(long, default_value_t = 30.0)]
    perplexity: f64,
    /// Barnes-Hut approximation threshold (0.0 is exact)
    #[clap(long, default_value_t = 0.5)]
    theta: f64,
    /// Gradient-descent iterations
    #[clap(long, default_value_t = 1000)]
    max_iter: usize,
    /// Also save the embedded coordinates as CSV
    #[clap(long)]
    coords_output: Option<PathBuf>,
}

pub fn run(arg: &EmbedTsneArg) -> anyhow::Result<()> {
    let (_corpus, matrix) = util::load_matrix(&arg.corpus)?;

    let records = scaling::standardize(&matrix.records)?;
    let settings = TsneSettings {
        perplexity: arg.perplexity,
        theta: arg.theta,
        max_iter: arg.max_iter,
    };
    eprintln!(
        "Running t-SNE (perplexity {}, theta {}, {} iterations)...",
        settings.perplexity, settings.theta, settings.max_iter
    );
    let coords = embedding::tsne_2d(&records, &settings)?;

    let groups = plot::group_by_source(&coords, &matrix.sources);
    plot::render_scatter(
        &arg.plot,
        "t-SNE embedding of fight records",
        "t-SNE 1",
        "t-SNE 2",
        &groups,
    )?;
    println!("Scatter plot saved to: {}", arg.plot.display());

    if let Some(coords_output) = &arg.coords_output {
        report::save_coords_csv(coords_output, &matrix, &coords)?;
    }

    Ok(())
}
