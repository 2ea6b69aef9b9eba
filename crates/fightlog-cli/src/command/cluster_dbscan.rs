use std::path::PathBuf;

use clap::Args;
use fightlog_analysis::{clustering, embedding, scaling, summary};

use crate::{plot, report, util};

#[derive(Debug, Clone, Args)]
pub struct ClusterDbscanArg {
    /// Directory tree containing fight record JSON files
    corpus: PathBuf,
    /// Neighborhood radius in standardized feature space
    #[clap(long, default_value_t = 0.5)]
    epsilon: f64,
    /// Minimum neighborhood size for a core point
    #[clap(long, default_value_t = 5)]
    min_points: usize,
    /// Output path for the scatter plot PNG
    #[clap(long, default_value = "dbscan_scatter.png")]
    plot: PathBuf,
    /// Save the per-cluster summary as CSV
    #[clap(long)]
    summary_output: Option<PathBuf>,
    /// Save the per-fight cluster assignment as CSV
    #[clap(long)]
    assignments_output: Option<PathBuf>,
}

pub fn run(arg: &ClusterDbscanArg) -> anyhow::Result<()> {
    let (_corpus, matrix) = util::load_matrix(&arg.corpus)?;

    let scaled = scaling::standardize(&matrix.records)?;
    eprintln!(
        "Running DBSCAN (epsilon = {}, min_points = {})...",
        arg.epsilon, arg.min_points
    );
    let assignment = clustering::dbscan(&scaled, arg.epsilon, arg.min_points)?;
    println!(
        "DBSCAN found {} clusters ({} of {} fights are noise)",
        assignment.n_clusters,
        assignment.noise_count(),
        matrix.num_fights()
    );

    let summaries = summary::summarize(&matrix, &assignment);
    report::print_cluster_summaries(&summaries);

    let embedding = embedding::pca_2d(&scaled)?;
    let ratio = &embedding.explained_variance_ratio;
    let groups = plot::group_by_cluster(&embedding.coords, &assignment);
    plot::render_scatter(
        &arg.plot,
        &format!(
            "DBSCAN clusters (epsilon = {}, min_points = {})",
            arg.epsilon, arg.min_points
        ),
        &format!("PC1 ({:.3})", ratio[0]),
        &format!("PC2 ({:.3})", ratio[1]),
        &groups,
    )?;
    println!("Scatter plot saved to: {}", arg.plot.display());

    if let Some(summary_output) = &arg.summary_output {
        report::save_summary_csv(summary_output, &summaries)?;
    }
    if let Some(assignments_output) = &arg.assignments_output {
        report::save_assignments_csv(assignments_output, &matrix, &assignment)?;
    }

    Ok(())
}
