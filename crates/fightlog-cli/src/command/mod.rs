use clap::{Parser, Subcommand};

use self::{
    cluster_dbscan::ClusterDbscanArg, cluster_kmeans::ClusterKmeansArg, embed_pca::EmbedPcaArg,
    embed_tsne::EmbedTsneArg, scan::ScanArg,
};

mod cluster_dbscan;
mod cluster_kmeans;
mod embed_pca;
mod embed_tsne;
mod scan;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What analysis pass to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Inventory the corpus and report per-metric statistics
    Scan(#[clap(flatten)] ScanArg),
    /// Project fights to 2-D with PCA and render a scatter plot
    EmbedPca(#[clap(flatten)] EmbedPcaArg),
    /// Embed fights to 2-D with Barnes-Hut t-SNE
    EmbedTsne(#[clap(flatten)] EmbedTsneArg),
    /// Cluster fights with seeded k-means
    ClusterKmeans(#[clap(flatten)] ClusterKmeansArg),
    /// Cluster fights with DBSCAN
    ClusterDbscan(#[clap(flatten)] ClusterDbscanArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Scan(arg) => scan::run(&arg)?,
        Mode::EmbedPca(arg) => embed_pca::run(&arg)?,
        Mode::EmbedTsne(arg) => embed_tsne::run(&arg)?,
        Mode::ClusterKmeans(arg) => cluster_kmeans::run(&arg)?,
        Mode::ClusterDbscan(arg) => cluster_dbscan::run(&arg)?,
    }
    Ok(())
}
