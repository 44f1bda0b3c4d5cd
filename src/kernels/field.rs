use crate::error::{MeshError, Result};

/// Lowest value of `sin(t) / t`, reached near `t = 4.493`.
const SINC_MINIMUM: f32 = -0.217_234;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRemap {
    pub offset: f32,
    pub gain: f32,
}

impl Default for ColorRemap {
    fn default() -> Self {
        Self {
            offset: 0.0,
            gain: 1.0,
        }
    }
}

impl ColorRemap {
    pub fn spanning(min: f32, max: f32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = hi - lo;
        Self {
            offset: -lo,
            gain: if span > 0.0 { 1.0 / span } else { 1.0 },
        }
    }

    pub fn apply(&self, height: f32) -> f32 {
        (height + self.offset) * self.gain
    }
}

pub trait ScalarField {
    const LABEL: &'static str;

    /// WGSL defining `fn field(x: f32, y: f32) -> f32` and the `override`
    /// declarations named by [`ScalarField::constants`].
    const SOURCE: &'static str;

    fn constants(&self) -> Vec<(&'static str, f32)>;

    fn color_remap(&self) -> ColorRemap;

    fn validate(&self) -> Result<()> {
        let remap = self.color_remap();
        let remap_constants = [("COLOR_OFFSET", remap.offset), ("COLOR_GAIN", remap.gain)];
        for (name, value) in self.constants().into_iter().chain(remap_constants) {
            if !value.is_finite() {
                return Err(MeshError::InvalidFieldParameter { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialSinc {
    pub height_scale: f32,
    pub frequency: f32,
    pub remap: ColorRemap,
}

impl RadialSinc {
    pub fn new(height_scale: f32, frequency: f32) -> Self {
        Self {
            height_scale,
            frequency,
            remap: ColorRemap::spanning(SINC_MINIMUM * height_scale, height_scale),
        }
    }

    pub fn with_remap(mut self, remap: ColorRemap) -> Self {
        self.remap = remap;
        self
    }
}

impl Default for RadialSinc {
    fn default() -> Self {
        Self::new(1.0, 10.0)
    }
}

impl ScalarField for RadialSinc {
    const LABEL: &'static str = "radial_sinc";
    const SOURCE: &'static str = include_str!("shaders/field_radial_sinc.wgsl");

    fn constants(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("HEIGHT_SCALE", self.height_scale),
            ("FREQUENCY", self.frequency),
        ]
    }

    fn color_remap(&self) -> ColorRemap {
        self.remap
    }

    fn validate(&self) -> Result<()> {
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(MeshError::InvalidFieldParameter {
                name: "FREQUENCY",
                value: self.frequency,
            });
        }
        let remap = self.remap;
        for (name, value) in [
            ("HEIGHT_SCALE", self.height_scale),
            ("COLOR_OFFSET", remap.offset),
            ("COLOR_GAIN", remap.gain),
        ] {
            if !value.is_finite() {
                return Err(MeshError::InvalidFieldParameter { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paraboloid {
    pub height_scale: f32,
    pub remap: ColorRemap,
}

impl Paraboloid {
    pub fn new(height_scale: f32) -> Self {
        Self {
            height_scale,
            remap: ColorRemap::spanning(0.0, 2.0 * height_scale),
        }
    }

    pub fn with_remap(mut self, remap: ColorRemap) -> Self {
        self.remap = remap;
        self
    }
}

impl Default for Paraboloid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScalarField for Paraboloid {
    const LABEL: &'static str = "paraboloid";
    const SOURCE: &'static str = include_str!("shaders/field_paraboloid.wgsl");

    fn constants(&self) -> Vec<(&'static str, f32)> {
        vec![("HEIGHT_SCALE", self.height_scale)]
    }

    fn color_remap(&self) -> ColorRemap {
        self.remap
    }
}
