use clap::Parser;
use merge_job::utils::logger;
use merge_job::{CliConfig, MergeJob, UniformJitter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting merge job");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Echo the resolved paths, as the original job does on startup.
    tracing::info!(
        "Input files: {}, {}",
        config.input_a.display(),
        config.input_b.display()
    );
    tracing::info!("Output file: {}", config.ofile.display());

    let mut job = MergeJob::new(UniformJitter::default());
    match job.run(&config.input_a, &config.input_b, &config.ofile) {
        Ok(()) => {
            tracing::info!("✅ Merge job completed successfully!");
            println!("📁 Output saved to: {}", config.ofile.display());
        }
        Err(e) => {
            tracing::error!("❌ Merge job failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
