use clap::{Parser, Subcommand};
use reviewguard_classifiers::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reviewguard")]
#[command(author, version, about = "Train and run the fake review detector")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(
        short,
        long,
        global = true,
        env = "REVIEWGUARD_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the model on a labeled CSV and write the artifact
    Train {
        /// Labeled dataset with `text` and `label` columns
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Where to write the model artifact
        #[arg(short, long)]
        artifact: Option<PathBuf>,
    },

    /// Score a single review and print the JSON verdict
    Predict {
        /// Review text
        text: Option<String>,

        /// Star rating left with the review (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,

        /// The purchase was verified by the marketplace
        #[arg(long, conflicts_with = "unverified")]
        verified: bool,

        /// The purchase could not be verified
        #[arg(long)]
        unverified: bool,

        /// Model artifact to load
        #[arg(short, long)]
        artifact: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
