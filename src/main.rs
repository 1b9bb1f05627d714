use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use medaltable::{
    config::{RunConfig, SiteConfig},
    logging,
    rank::SortKey,
    Pipeline,
};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fetch the Rio 2016 medal table and print it ranked"
)]
struct Args {
    /// Sort results by number of Gold, Silver, Bronze or Total medals
    #[arg(short = 's', long = "sort", value_enum, ignore_case = true, default_value_t = SortKey::Total)]
    sort_by: SortKey,
    /// Write a debug log to Rio2016MedalTable.log
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = RunConfig::new(args.sort_by, args.debug);

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cfg.debug {
                error!("{:#}", e);
            }
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &RunConfig) -> Result<()> {
    // ─── 1) logging ──────────────────────────────────────────────────
    logging::init(cfg)?;
    info!("startup");
    debug!("sortby: {}", cfg.sort_by);

    // ─── 2) check the site contract ──────────────────────────────────
    let pipeline = Pipeline::preflight(SiteConfig::builtin())?;

    // ─── 3) fetch → extract → rank → print ───────────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline.run(cfg, &mut out)?;
    out.flush().context("flushing stdout")?;

    info!("done");
    Ok(())
}
