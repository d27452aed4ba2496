mod args;

use std::{
    fs,
    io::{self, Write},
};

use anyhow::Context;
use clap::Parser;
use log::info;
use object_parser::{convert_obj_file, EmitterConfig};

use args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = EmitterConfig {
        source_name: args.input.clone(),
        vertex_array_name: args.vertex_array_name,
        face_array_name: args.face_array_name,
    };

    let output = convert_obj_file(&args.input, &config)
        .with_context(|| format!("Failed to convert {}", args.input))?;

    match args.output {
        Some(path) => {
            info!("Writing arrays to {}", path.display());
            fs::write(&path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?
        }
    }

    Ok(())
}
