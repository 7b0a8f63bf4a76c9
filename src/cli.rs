// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::field::FieldSampler;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "fly-camera")]
#[command(about = "Free-flying camera viewer", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start in smoothed movement mode (toggle with F8)
    #[arg(long)]
    pub smooth: bool,

    /// Initial scalar field sampler (cycle with F7)
    #[arg(long, value_enum)]
    pub sampler: Option<FieldSampler>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Layer command-line flags over a loaded config
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.smooth {
            config.camera.smoothing = true;
        }
        if let Some(sampler) = self.sampler {
            config.sampler = sampler;
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        config
    }
}
