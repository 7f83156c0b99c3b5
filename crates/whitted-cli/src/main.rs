mod cli;
mod executor;
mod output;
mod progress;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use utils::{Attenuation, AvailableScene, Dimensions, ExecutionMode};

#[derive(Parser, Debug)]
#[command(about = "Render a scene with a recursive ray tracer")]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(short, long, default_value = "800x600")]
    /// Screen dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, default_value_t = 60.0)]
    /// Vertical field of view, in degrees
    fov: f32,

    #[arg(long, default_value_t = 3)]
    /// Maximum recursion depth of reflected and refracted rays
    depth: u32,

    #[arg(long, default_value_t = 0.05)]
    /// Surfaces whose direct lighting is dimmer than this do not spawn reflected nor refracted rays
    threshold: f32,

    #[arg(long, default_value = "0.25,0.05,0.025")]
    /// Point lights falloff coefficients in format `constant`,`linear`,`quadratic`
    attenuation: Attenuation,

    #[arg(long)]
    soft_shadows: bool,

    #[arg(long)]
    glossy_reflection: bool,

    #[arg(long)]
    motion_blur: bool,

    #[arg(short, long, default_value = "output/render.png")]
    /// Where to save the image, PNG and JPEG are supported
    output: PathBuf,

    #[arg(short, long, value_enum, default_value_t)]
    execution_mode: ExecutionMode,

    #[arg(long, default_value_t)]
    /// Seed to use for all the random stuff.
    /// Given a seed, the rendering is deterministic (the output only depends on x, y and seed).
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cli = Cli::from_args(args)?;
    cli.run()?;

    log::info!("done");
    Ok(())
}
