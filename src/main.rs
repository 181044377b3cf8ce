//! Viewer binary: opens a window driven by the camera controllers.
//!
//! Run with `cargo run -- my_preset.toml` to start from an options preset,
//! or `cargo run -- --schema options.json` to export the options schema.

use std::path::PathBuf;

use clap::Parser;
use pivot::{Options, PivotError, Viewer};

/// Pivot viewer command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "pivot", about = "Orbit and first-person camera viewer")]
struct CliArgs {
    /// Options preset (TOML) to start from.
    preset: Option<PathBuf>,

    /// Write the options JSON Schema to this path and exit.
    #[arg(long, value_name = "OUT", conflicts_with = "preset")]
    schema: Option<PathBuf>,
}

fn run(args: CliArgs) -> Result<(), PivotError> {
    if let Some(out) = args.schema {
        std::fs::write(&out, Options::json_schema_string()?)?;
        log::info!("wrote options schema to {}", out.display());
        return Ok(());
    }

    let options = match args.preset {
        Some(path) => {
            let options = Options::load(&path)?;
            log::info!("loaded preset {}", path.display());
            options
        }
        None => Options::default(),
    };
    Viewer::builder().with_options(options).build().run()
}

fn main() {
    env_logger::init();

    if let Err(e) = run(CliArgs::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
