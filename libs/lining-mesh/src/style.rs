//! Display metadata: colors and the palette segments cycle through.
//!
//! The palette's contents are a styling concern owned by the host; the
//! engine only applies `colors[index mod len]`.

use config::constants::{LINING_PALETTE, REINFORCEMENT_COLOR};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// RGBA color with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque color from a `0xRRGGBB` literal.
    ///
    /// ```rust
    /// use lining_mesh::Color;
    /// assert_eq!(Color::from_hex(0xFF0000), Color([1.0, 0.0, 0.0, 1.0]));
    /// ```
    #[must_use]
    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        Self([channel(16), channel(8), channel(0), 1.0])
    }
}

/// Lining colors plus the single reinforcement color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Colors cycled by segment index.
    pub colors: Vec<Color>,
    /// Color shared by every hoop.
    pub reinforcement: Color,
}

impl Palette {
    /// Color of angular position `index`, identical in every ring so that
    /// staggered joints stay visible.
    ///
    /// ## Errors
    ///
    /// `InvalidParameter` for an empty palette.
    pub fn lining_color(&self, index: usize) -> MeshResult<Color> {
        if self.colors.is_empty() {
            return Err(MeshError::invalid("palette has no lining colors"));
        }
        Ok(self.colors[index % self.colors.len()])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: LINING_PALETTE.iter().copied().map(Color::from_hex).collect(),
            reinforcement: Color::from_hex(REINFORCEMENT_COLOR),
        }
    }
}
