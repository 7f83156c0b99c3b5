use anyhow::{ensure, Result};
use whitted::{
    camera::Camera,
    config::{TraceConfig, MAX_SUPPORTED_DEPTH},
    integrators::WhittedIntegrator,
    math::{point::Point, vec::Vec3},
    renderer::Renderer,
    scene::Scene,
    utils::{counter, timer::timed_scope_log},
};

use crate::{
    executor::Executor,
    output::FileOutput,
    utils::{Dimensions, ExecutionMode},
    Args,
};

pub struct Cli {
    pub scene: Scene,
    pub camera: Camera,
    pub config: TraceConfig,
    pub dimensions: Dimensions,
    pub seed: u64,
    pub execution_mode: ExecutionMode,
    pub output: FileOutput,
}

impl Cli {
    pub fn from_args(args: Args) -> Result<Self> {
        let config = trace_config(&args)?;
        log::debug!("{config:?}");

        log::info!("loading scene {:?}", args.scene);
        let scene = Scene::from(args.scene);

        let camera = Camera::look_at(
            Point::ORIGIN,
            Point::new(0.0, 0.0, -1.0),
            Vec3::Y,
            f32::to_radians(args.fov),
            args.dimensions.aspect_ratio(),
        );

        Ok(Self {
            scene,
            camera,
            config,
            dimensions: args.dimensions,
            seed: args.seed,
            execution_mode: args.execution_mode,
            output: FileOutput::new(args.output),
        })
    }

    pub fn run(self) -> Result<()> {
        let executor = Executor {
            renderer: Renderer {
                world: self.scene.world(),
                camera: self.camera,
                config: self.config,
                integrator: WhittedIntegrator,
                width: self.dimensions.width,
                height: self.dimensions.height,
                seed: self.seed,
            },
        };

        log::info!("rendering {}", self.dimensions);
        let output_buffer = timed_scope_log("render", || match self.execution_mode {
            ExecutionMode::Multithreaded => {
                log::info!("execution mode: multithreaded");
                executor.run_multithreaded()
            }
            ExecutionMode::Monothreaded => {
                log::info!("execution mode: monothreaded");
                executor.run_monothreaded()
            }
        })
        .res;

        self.output.commit(&output_buffer)?;

        counter::report_counters();
        Ok(())
    }
}

/// Builds the tracer configuration, rejecting values the tracer can not handle
pub fn trace_config(args: &Args) -> Result<TraceConfig> {
    ensure!(
        args.depth <= MAX_SUPPORTED_DEPTH,
        "a depth of {} is not supported, the maximum is {MAX_SUPPORTED_DEPTH}",
        args.depth
    );
    ensure!(
        args.threshold >= 0.0,
        "the threshold can not be negative, got {}",
        args.threshold
    );

    let attenuation = args.attenuation.0;
    ensure!(
        attenuation.constant > 0.0,
        "the constant attenuation coefficient has to be positive, got {}",
        attenuation.constant
    );
    ensure!(
        attenuation.linear >= 0.0 && attenuation.quadratic >= 0.0,
        "attenuation coefficients can not be negative"
    );

    Ok(TraceConfig {
        max_depth: args.depth,
        threshold: args.threshold,
        attenuation,
        soft_shadows: args.soft_shadows,
        glossy_reflection: args.glossy_reflection,
        motion_blur: args.motion_blur,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use whitted::config::{DistanceAttenuation, TraceConfig};

    use crate::Args;

    use super::trace_config;

    fn config_from(args: &[&str]) -> anyhow::Result<TraceConfig> {
        let args = Args::try_parse_from(std::iter::once("whitted").chain(args.iter().copied()))?;
        trace_config(&args)
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        let default = TraceConfig::default();
        assert_eq!(config.max_depth, default.max_depth);
        assert_eq!(config.threshold, default.threshold);
        assert_eq!(config.attenuation, default.attenuation);
        assert!(!config.soft_shadows);
        assert!(!config.glossy_reflection);
        assert!(!config.motion_blur);
    }

    #[test]
    fn flags() {
        let config = config_from(&[
            "--depth",
            "5",
            "--threshold",
            "0",
            "--attenuation",
            "1,0,0",
            "--soft-shadows",
            "--motion-blur",
        ])
        .unwrap();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.threshold, 0.0);
        assert_eq!(config.attenuation, DistanceAttenuation::NONE);
        assert!(config.soft_shadows);
        assert!(!config.glossy_reflection);
        assert!(config.motion_blur);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(config_from(&["--depth", "11"]).is_err());
        assert!(config_from(&["--threshold=-0.1"]).is_err());
        assert!(config_from(&["--attenuation", "0,1,1"]).is_err());
        assert!(config_from(&["--attenuation=1,-1,0"]).is_err());
        assert!(config_from(&["--dimensions", "12"]).is_err());
    }
}
