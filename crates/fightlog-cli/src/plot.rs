//! Scatter-plot rendering
//!
//! All commands that embed fights into 2-D render the result as a static PNG
//! scatter plot, one color per group (source folder or cluster), with a
//! legend. Rendering is delegated to `plotters`.

use std::{collections::BTreeMap, fs, ops::Range, path::Path};

use anyhow::Context as _;
use fightlog_analysis::{clustering::ClusterAssignment, summary::ClusterLabel};
use ndarray::Array2;
use plotters::prelude::*;

/// One colored point group of a scatter plot.
pub(crate) struct ScatterGroup {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Group embedded coordinates by their per-row string label (source folder).
///
/// Groups come out sorted by label so colors are stable across runs.
pub(crate) fn group_by_source(coords: &Array2<f64>, sources: &[String]) -> Vec<ScatterGroup> {
    let mut groups: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for (row, source) in sources.iter().enumerate() {
        groups
            .entry(source)
            .or_default()
            .push((coords[[row, 0]], coords[[row, 1]]));
    }
    groups
        .into_iter()
        .map(|(name, points)| ScatterGroup {
            name: name.to_owned(),
            points,
        })
        .collect()
}

/// Group embedded coordinates by cluster assignment, noise last.
pub(crate) fn group_by_cluster(
    coords: &Array2<f64>,
    assignment: &ClusterAssignment,
) -> Vec<ScatterGroup> {
    let mut groups: BTreeMap<ClusterLabel, Vec<(f64, f64)>> = BTreeMap::new();
    for (row, label) in assignment.labels.iter().enumerate() {
        let label = label.map_or(ClusterLabel::Noise, ClusterLabel::Cluster);
        groups
            .entry(label)
            .or_default()
            .push((coords[[row, 0]], coords[[row, 1]]));
    }
    groups
        .into_iter()
        .map(|(label, points)| ScatterGroup {
            name: label.to_string(),
            points,
        })
        .collect()
}

/// Render a scatter plot PNG with one color and legend entry per group.
pub(crate) fn render_scatter(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    groups: &[ScatterGroup],
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let (x_range, y_range) = axis_ranges(groups);

    let root = BitMapBackend::new(path, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for (index, group) in groups.iter().enumerate() {
        let color = Palette99::pick(index).mix(0.85);
        chart
            .draw_series(
                group
                    .points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )?
            .label(group.name.clone())
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    root.present()
        .with_context(|| format!("Failed to write plot to {}", path.display()))?;

    Ok(())
}

/// Data bounds with 5% padding; falls back to a unit box for degenerate data.
fn axis_ranges(groups: &[ScatterGroup]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for group in groups {
        for &(x, y) in &group.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
        return (-1.0..1.0, -1.0..1.0);
    }
    let x_pad = ((x_max - x_min) * 0.05).max(0.5);
    let y_pad = ((y_max - y_min) * 0.05).max(0.5);
    (
        (x_min - x_pad)..(x_max + x_pad),
        (y_min - y_pad)..(y_max + y_pad),
    )
}
