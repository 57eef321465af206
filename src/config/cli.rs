use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "merge_job")]
#[command(about = "Merges two single-column numeric CSV files after a simulated work delay")]
pub struct CliConfig {
    /// First input file, read before INPUT_B
    pub input_a: PathBuf,

    /// Second input file
    pub input_b: PathBuf,

    /// Output file path
    #[arg(short = 'o', long = "ofile", default_value = "def_output.csv")]
    pub ofile: PathBuf,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
