//! Engine configuration: grid size, palette, retry bounds and seed.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{
    Color, DEFAULT_MAX_SETTLE_STEPS, DEFAULT_SHUFFLE_ATTEMPTS, GRID_SIZE, MAX_GRID_SIZE,
    MIN_PALETTE, MIN_RUN,
};

/// Configuration rejected by [`EngineConfig::validate`] or [`Palette::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is smaller than the minimum run length {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("palette needs at least {min} colors, got {len}")]
    PaletteTooSmall { len: usize, min: usize },
    #[error("palette can hold at most {max} colors, asked for {len}")]
    PaletteTooLarge { len: usize, max: usize },
    #[error("palette lists `{}` more than once", .0.as_str())]
    DuplicateColor(Color),
}

/// Ordered set of distinct colors new tokens are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: ArrayVec<Color, { Color::COUNT }>,
}

impl Palette {
    pub fn new(colors: &[Color]) -> Result<Self, ConfigError> {
        let mut out = ArrayVec::new();
        for &color in colors {
            if out.contains(&color) {
                return Err(ConfigError::DuplicateColor(color));
            }
            out.push(color);
        }
        if out.len() < MIN_PALETTE {
            return Err(ConfigError::PaletteTooSmall {
                len: out.len(),
                min: MIN_PALETTE,
            });
        }
        Ok(Self { colors: out })
    }

    /// The first `count` colors in canonical order.
    pub fn first(count: usize) -> Result<Self, ConfigError> {
        if count > Color::COUNT {
            return Err(ConfigError::PaletteTooLarge {
                len: count,
                max: Color::COUNT,
            });
        }
        Self::new(&Color::ALL[..count])
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Uniformly random palette color
    pub fn pick(&self, rng: &mut SimpleRng) -> Color {
        *rng.pick(&self.colors)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ArrayVec::from(Color::ALL),
        }
    }
}

/// Engine settings.
///
/// Fixed for the lifetime of every grid the engine produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Edge length of the square grid
    pub grid_size: usize,
    /// Colors new tokens are drawn from
    pub palette: Palette,
    /// Random shuffles tried before the constructive layout is used
    pub shuffle_attempts: u32,
    /// Upper bound on steps performed by one [`crate::Engine::settle`]
    pub max_settle_steps: u32,
    /// RNG seed
    pub seed: u32,
}

impl EngineConfig {
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_shuffle_attempts(mut self, attempts: u32) -> Self {
        self.shuffle_attempts = attempts;
        self
    }

    pub fn with_max_settle_steps(mut self, steps: u32) -> Self {
        self.max_settle_steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_RUN {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_RUN,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.palette.len() < MIN_PALETTE {
            return Err(ConfigError::PaletteTooSmall {
                len: self.palette.len(),
                min: MIN_PALETTE,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            palette: Palette::default(),
            shuffle_attempts: DEFAULT_SHUFFLE_ATTEMPTS,
            max_settle_steps: DEFAULT_MAX_SETTLE_STEPS,
            seed: 1,
        }
    }
}
