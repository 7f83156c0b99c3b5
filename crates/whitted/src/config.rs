//! Read-only knobs of the tracer.
//!
//! A [TraceConfig] is built once, before rendering, and is then shared by every pixel.
//! The tracer never mutates it.

/// Coefficients of the point lights falloff $\frac{1}{c_0 + c_1 d + c_2 d^2}$
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceAttenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl DistanceAttenuation {
    /// No falloff at all
    pub const NONE: Self = Self {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    /// Falloff factor at `distance` from the light, clamped to $\left[0, 1\right]$
    pub fn at(&self, distance: f32) -> f32 {
        let denominator = self.constant + self.linear * distance + self.quadratic * distance * distance;
        (1.0 / denominator).clamp(0.0, 1.0)
    }
}

impl Default for DistanceAttenuation {
    fn default() -> Self {
        Self {
            constant: 0.25,
            linear: 0.05,
            quadratic: 0.025,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Rays deeper than this are black
    pub max_depth: u32,
    /// Local contributions dimmer than this are not refined by secondary rays
    pub threshold: f32,
    pub attenuation: DistanceAttenuation,

    pub soft_shadows: bool,
    pub soft_shadow_samples: u32,
    pub soft_shadow_radius: f32,

    pub glossy_reflection: bool,
    pub glossy_samples: u32,
    pub glossy_radius: f32,

    pub motion_blur: bool,
    /// Lateral offset between two consecutive motion blur rays
    pub motion_blur_step: f32,

    /// Index of refraction of the medium the camera sits in
    pub ambient_index: f32,
}

/// Deepest recursion a render may ask for, the ray tree grows exponentially with it
pub const MAX_SUPPORTED_DEPTH: u32 = 10;

impl TraceConfig {
    /// Extra primary rays traced when motion blur is enabled
    pub const MOTION_BLUR_SAMPLES: u32 = 9;
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            threshold: 0.05,
            attenuation: DistanceAttenuation::default(),
            soft_shadows: false,
            soft_shadow_samples: 16,
            soft_shadow_radius: 0.05,
            glossy_reflection: false,
            glossy_samples: 39,
            glossy_radius: 0.02,
            motion_blur: false,
            motion_blur_step: 0.003,
            ambient_index: 1.0,
        }
    }
}
