use std::path::PathBuf;

use clap::Parser;

/// Display a single raw planar YUV 4:2:0 frame in a window.
#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the raw 4:2:0 frame data
    pub frame: PathBuf,
    /// Frame width in pixels
    #[arg(long, default_value_t = 352)]
    pub width: usize,
    /// Frame height in pixels
    #[arg(long, default_value_t = 288)]
    pub height: usize,
    /// Convert the frame on the CPU and write it to this PNG instead of opening a window
    #[arg(long)]
    pub dump: Option<PathBuf>,
}
