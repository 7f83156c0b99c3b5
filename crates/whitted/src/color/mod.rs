use bytemuck::{Pod, Zeroable};

/// A linear RGB triple.
///
/// Channels are not bounded: intermediate results of the tracer can go above 1.0,
/// they are only brought back to a displayable range by [Rgb::clamp].
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn splat(v: f32) -> Self {
        Self([v, v, v])
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    /// Clamp each channel to $\left[0, 1\right]$
    pub fn clamp(self) -> Self {
        Self(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    pub fn is_black(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }
}

impl std::ops::Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_array([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl std::ops::Mul<Rgb> for f32 {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Self::Output {
        Rgb::from_array(rhs.0.map(|c| self * c))
    }
}

impl std::ops::Div<f32> for Rgb {
    type Output = Rgb;

    fn div(self, rhs: f32) -> Self::Output {
        Rgb::from_array(self.0.map(|c| c / rhs))
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(val: [f32; 3]) -> Self {
        Rgb::from_array(val)
    }
}

pub mod linear {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
    pub const BLACK: Rgb = Rgb::from_array([0.0, 0.0, 0.0]);
    pub const RED: Rgb = Rgb::from_array([1.0, 0.0, 0.0]);
    pub const GREEN: Rgb = Rgb::from_array([0.0, 1.0, 0.0]);
    pub const BLUE: Rgb = Rgb::from_array([0.0, 0.0, 1.0]);
}

#[cfg(test)]
mod tests {
    use super::{linear, Rgb};

    #[test]
    fn clamp() {
        let c = Rgb::from_array([-0.5, 0.5, 3.0]).clamp();
        assert_eq!(c, Rgb::from_array([0.0, 0.5, 1.0]));
    }

    #[test]
    fn arithmetic() {
        let c = (2.0 * (linear::RED + linear::BLUE)) / 4.0;
        assert_eq!(c, Rgb::from_array([0.5, 0.0, 0.5]));
        assert!(linear::BLACK.is_black());
        assert!(!linear::GREEN.is_black());
    }
}
