use super::constants::*;
use super::spring::{SpringError, SpringProfile};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("attribute {key}: {value:?} is not a number")]
    NotANumber { key: &'static str, value: String },
    #[error("attribute {key}: {value} is out of range")]
    OutOfRange { key: &'static str, value: f32 },
    #[error("unknown tilt variant {0:?}")]
    UnknownVariant(String),
    #[error(transparent)]
    Spring(#[from] SpringError),
}

/// How a pointer offset from the card centre becomes a rotation target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TiltMapping {
    /// Offset over the half-extent, so the edges reach `amplitude_deg`.
    Normalized { amplitude_deg: f32 },
    /// Raw pixel offset times `deg_per_px`, independent of card size.
    PerPixel { deg_per_px: f32 },
}

impl TiltMapping {
    #[inline]
    pub fn gain(self) -> f32 {
        match self {
            Self::Normalized { amplitude_deg } => amplitude_deg,
            Self::PerPixel { deg_per_px } => deg_per_px,
        }
    }

    fn with_gain(self, gain: f32) -> Self {
        match self {
            Self::Normalized { .. } => Self::Normalized { amplitude_deg: gain },
            Self::PerPixel { .. } => Self::PerPixel { deg_per_px: gain },
        }
    }

    fn max_gain(self) -> f32 {
        match self {
            Self::Normalized { .. } => 90.0,
            Self::PerPixel { .. } => IMAGE_TILT_MAX_DEG_PER_PX,
        }
    }
}

/// Per-card tilt configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub mapping: TiltMapping,
    pub scale_on_hover: f32,
    /// Image tilts grow on the first move rather than on enter.
    pub scale_on_move: bool,
    pub caption_velocity_gain: f32,
    pub body_spring: SpringProfile,
    pub caption_spring: SpringProfile,
    pub tooltip_spring: SpringProfile,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            mapping: TiltMapping::Normalized {
                amplitude_deg: TILT_ROTATE_AMPLITUDE_DEG,
            },
            scale_on_hover: TILT_SCALE_ON_HOVER,
            scale_on_move: false,
            caption_velocity_gain: CAPTION_VELOCITY_GAIN,
            body_spring: SpringProfile::from_tuple(BODY_SPRING),
            caption_spring: SpringProfile::from_tuple(CAPTION_SPRING),
            tooltip_spring: SpringProfile::from_tuple(TOOLTIP_SPRING),
        }
    }
}

impl TiltConfig {
    pub const VARIANT_ATTR: &'static str = "data-tilt";
    pub const AMPLITUDE_ATTR: &'static str = "data-tilt-amplitude";
    pub const SCALE_ATTR: &'static str = "data-tilt-scale";

    /// Gentle per-pixel tilt for gallery images and wireframes.
    pub fn image() -> Self {
        Self {
            mapping: TiltMapping::PerPixel {
                deg_per_px: IMAGE_TILT_DEG_PER_PX,
            },
            scale_on_hover: IMAGE_TILT_SCALE,
            scale_on_move: true,
            body_spring: SpringProfile::from_tuple(IMAGE_SPRING),
            ..Self::default()
        }
    }

    /// Builds a config from a card's raw attribute values. `variant` picks
    /// the base (`""`/`"card"` or `"image"`); missing values keep its
    /// defaults. The amplitude attribute sets the mapping's gain.
    pub fn from_attrs(
        variant: Option<&str>,
        amplitude: Option<&str>,
        scale: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = match variant.map(str::trim) {
            None | Some("") | Some("card") => Self::default(),
            Some("image") => Self::image(),
            Some(other) => return Err(ConfigError::UnknownVariant(other.to_string())),
        };
        if let Some(raw) = amplitude {
            let gain = parse_number(Self::AMPLITUDE_ATTR, raw)?;
            cfg.mapping = cfg.mapping.with_gain(gain);
        }
        if let Some(raw) = scale {
            cfg.scale_on_hover = parse_number(Self::SCALE_ATTR, raw)?;
        }
        cfg.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        let gain = self.mapping.gain();
        if !(gain >= 0.0 && gain <= self.mapping.max_gain()) {
            return Err(ConfigError::OutOfRange {
                key: Self::AMPLITUDE_ATTR,
                value: gain,
            });
        }
        if !(self.scale_on_hover > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: Self::SCALE_ATTR,
                value: self.scale_on_hover,
            });
        }
        self.body_spring.validate()?;
        self.caption_spring.validate()?;
        self.tooltip_spring.validate()?;
        Ok(self)
    }
}

/// Per-page scroll tracking configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub probe_offset: f64,
    pub section_top_offset: f64,
    pub nav_scroll_offset: f64,
    pub nav_timeout: Duration,
    pub throttle: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            probe_offset: SCROLL_PROBE_OFFSET_PX,
            section_top_offset: SECTION_TOP_OFFSET_PX,
            nav_scroll_offset: NAV_SCROLL_OFFSET_PX,
            nav_timeout: Duration::from_millis(NAV_TIMEOUT_MS),
            throttle: Duration::from_millis(SCROLL_THROTTLE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightConfig {
    pub dim_opacity: f32,
    pub fade_tau_sec: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            dim_opacity: SPOTLIGHT_DIM_OPACITY,
            fade_tau_sec: SPOTLIGHT_FADE_TAU_SEC,
        }
    }
}

pub fn parse_number(key: &'static str, raw: &str) -> Result<f32, ConfigError> {
    let value = raw
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::NotANumber {
            key,
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ConfigError::OutOfRange { key, value });
    }
    Ok(value)
}
