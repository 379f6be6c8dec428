use crate::theme::Variant;

#[cfg(feature = "neon")]
pub fn variant() -> Variant {
    Variant::Neon
}

#[cfg(not(feature = "neon"))]
pub fn variant() -> Variant {
    Variant::Classic
}

pub const SPLINE_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";

/// Spring constants for the smoothed progress ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 120.0,
            damping: 20.0,
            mass: 0.2,
            rest_delta: 0.0005,
            rest_speed: 0.005,
        }
    }
}

/// Bounded linear map from scroll offset to hero card tilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRange {
    pub max_offset: f64,
    pub max_degrees: f64,
}

impl Default for ParallaxRange {
    fn default() -> Self {
        Self {
            max_offset: 600.0,
            max_degrees: 8.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Navbar elevates once the offset is strictly above this.
    pub nav_threshold: u32,
    pub spring: SpringConfig,
    pub parallax: ParallaxRange,
    pub reveal_stagger_ms: u32,
    pub frame_ms: u32,
    pub falling_code_seed: u64,
    pub falling_code_columns: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            nav_threshold: 12,
            spring: SpringConfig::default(),
            parallax: ParallaxRange::default(),
            reveal_stagger_ms: 50,
            frame_ms: 16,
            falling_code_seed: 0x5eed_c0de,
            falling_code_columns: 18,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
