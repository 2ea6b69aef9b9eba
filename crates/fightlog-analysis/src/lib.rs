//! Offline analysis of combat-simulation fight logs
//!
//! This crate provides the data-shaping and library-glue layer for the
//! `fightlog` CLI: loading a directory tree of fight-log JSON documents,
//! flattening each document into a fixed-order feature vector, and invoking
//! third-party routines (standardization, PCA, t-SNE, k-means, DBSCAN) over
//! the resulting matrix.
//!
//! # Overview
//!
//! A typical analysis pass looks like:
//!
//! 1. **Load the corpus** ([`corpus::FightCorpus`]): walk a root directory,
//!    parse every `.json` file, skip and record unparseable files
//! 2. **Build the feature matrix** ([`feature::FeatureMatrix`]): one row per
//!    fight, one column per [`feature::FightMetric`]
//! 3. **Standardize** ([`scaling::standardize`]): zero mean, unit variance
//!    per column
//! 4. **Embed or cluster** ([`embedding`], [`clustering`]): delegate to the
//!    `linfa` toolkit
//! 5. **Summarize** ([`summary::summarize`]): per-cluster descriptive
//!    statistics and per-source-folder breakdowns
//!
//! All numeric heavy lifting is delegated to `linfa` over `ndarray`; the code
//! here is limited to I/O, field lookup, and result shaping.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fightlog_analysis::{clustering, corpus::FightCorpus, feature::FeatureMatrix, scaling};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let corpus = FightCorpus::load(Path::new("output"))?;
//! let matrix = FeatureMatrix::from_corpus(&corpus);
//!
//! let scaled = scaling::standardize(&matrix.records)?;
//! let outcome = clustering::kmeans(&scaled, 4, 42)?;
//! println!("found {} clusters", outcome.assignment.n_clusters);
//! # Ok(())
//! # }
//! ```

pub mod clustering;
pub mod corpus;
pub mod embedding;
pub mod feature;
pub mod record;
pub mod scaling;
pub mod summary;
