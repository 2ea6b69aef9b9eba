//! Statistical analysis utilities for the fightlog project.
//!
//! This crate provides the small statistical toolbox used by the fight-log
//! analysis commands:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation, etc.
//! - **Percentiles**: compute and store percentile values for datasets
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use fightlog_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use fightlog_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```

pub mod descriptive;
pub mod percentiles;
