use core::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use whitted::{
    config::DistanceAttenuation,
    scene::{
        examples::{GlassScene, MirrorScene, SpheresScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    Spheres,
    Mirror,
    Glass,
}

impl From<AvailableScene> for Scene {
    fn from(val: AvailableScene) -> Self {
        match val {
            AvailableScene::Spheres => SpheresScene.into(),
            AvailableScene::Mirror => MirrorScene.into(),
            AvailableScene::Glass => GlassScene.into(),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Multithreaded,
    Monothreaded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;
        anyhow::ensure!(width > 0 && height > 0, "dimensions can not be null");

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

/// Point lights falloff coefficients in format `constant`,`linear`,`quadratic`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attenuation(pub DistanceAttenuation);

impl FromStr for Attenuation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coefficients = s
            .split(',')
            .map(|c| c.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()?;
        let [constant, linear, quadratic] = coefficients[..] else {
            return Err(anyhow::anyhow!(
                "expected 3 coefficients `constant`,`linear`,`quadratic`, got {}",
                coefficients.len()
            ));
        };

        Ok(Attenuation(DistanceAttenuation {
            constant,
            linear,
            quadratic,
        }))
    }
}
