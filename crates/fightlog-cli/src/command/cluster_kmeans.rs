use std::path::PathBuf;

use clap::Args;
use fightlog_analysis::{clustering, embedding, scaling, summary};

use crate::{plot, report, util};

#[derive(Debug, Clone, Args)]
pub struct ClusterKmeansArg {
    /// Directory tree containing fight record JSON files
    corpus: PathBuf,
    /// Number of clusters
    #[clap(long, default_value_t = 4)]
    clusters: usize,
    /// Seed for centroid initialization
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Output path for the scatter plot PNG
    #[clap(long, default_value = "kmeans_scatter.png")]
    plot: PathBuf,
    /// Save the per-cluster summary as CSV
    #[clap(long)]
    summary_output: Option<PathBuf>,
    /// Save the per-fight cluster assignment as CSV
    #[clap(long)]
    assignments_output: Option<PathBuf>,
}

pub fn run(arg: &ClusterKmeansArg) -> anyhow::Result<()> {
    let (_corpus, matrix) = util::load_matrix(&arg.corpus)?;

    let scaled = scaling::standardize(&matrix.records)?;
    eprintln!(
        "Running k-means (k = {}, seed = {})...",
        arg.clusters, arg.seed
    );
    let outcome = clustering::kmeans(&scaled, arg.clusters, arg.seed)?;
    println!(
        "k-means converged with {} clusters, inertia {:.4}",
        outcome.assignment.n_clusters, outcome.inertia
    );

    let summaries = summary::summarize(&matrix, &outcome.assignment);
    report::print_cluster_summaries(&summaries);

    // Clusters live in 7-D; project through PCA for the plot.
    let embedding = embedding::pca_2d(&scaled)?;
    let ratio = &embedding.explained_variance_ratio;
    let groups = plot::group_by_cluster(&embedding.coords, &outcome.assignment);
    plot::render_scatter(
        &arg.plot,
        &format!("k-means clusters (k = {})", arg.clusters),
        &format!("PC1 ({:.3})", ratio[0]),
        &format!("PC2 ({:.3})", ratio[1]),
        &groups,
    )?;
    println!("Scatter plot saved to: {}", arg.plot.display());

    if let Some(summary_output) = &arg.summary_output {
        report::save_summary_csv(summary_output, &summaries)?;
    }
    if let Some(assignments_output) = &arg.assignments_output {
        report::save_assignments_csv(assignments_output, &matrix, &outcome.assignment)?;
    }

    Ok(())
}
