use clap::Parser;
use motifscan::cli::{Args, CliMode};
use motifscan::error::Result;
use motifscan::logging;
use motifscan::pipeline::Session;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config()?;
    // The opaque corpus name resolves to a path here, outside the core.
    let path = PathBuf::from(&args.corpus);
    let mut session = Session::new(config)?;

    let started = Instant::now();
    let report = match args.mode {
        CliMode::Generate => {
            let mut writer = BufWriter::new(File::create(&path)?);
            let report = session.run_generate(&mut writer)?;
            writer.flush()?;
            report
        }
        CliMode::Read => {
            let reader = BufReader::new(File::open(&path)?);
            session.run_read(reader)?
        }
    };
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        corpus = %path.display(),
        "analysis finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
