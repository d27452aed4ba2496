use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use object_parser::emitter::{DEFAULT_FACE_ARRAY_NAME, DEFAULT_VERTEX_ARRAY_NAME};

/// Extract vertex positions and triangle indices from a Wavefront .obj file
/// as JavaScript array declarations.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Path to the Wavefront .obj file
    pub input: String,

    /// Write the arrays to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the vertex array
    #[arg(long = "vertex-array", value_name = "NAME", default_value = DEFAULT_VERTEX_ARRAY_NAME)]
    pub vertex_array_name: String,

    /// Name of the face array
    #[arg(long = "face-array", value_name = "NAME", default_value = DEFAULT_FACE_ARRAY_NAME)]
    pub face_array_name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
