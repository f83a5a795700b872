//! Box obstacles and the corners they expose to the visibility graph.
//!
//! An obstacle chooses how many of its four corners (1–4) become graph
//! vertices and where the run of corners starts.  Corners are taken
//! clockwise from the starting corner:
//!
//! ```text
//!   TopLeft ──────── TopRight
//!      │                 │
//!      │     (center)    │
//!      │                 │
//!   BottomLeft ───── BottomRight
//! ```
//!
//! With exactly two corners the pair may instead be *diagonal*: the starting
//! corner and the one opposite it.  The diagonal flag has no effect for other
//! corner counts.
//!
//! Corners are pushed outward by the clearance radius on both axes, so a
//! disk of that radius parked on a corner just clears the box.

use serde::{Deserialize, Serialize};

use nav_core::{Point, check_non_negative};

use crate::{GraphError, GraphResult, Rect};

/// Clockwise corner signs (x, y), starting top-left.
const CLOCKWISE: [(f32, f32); 4] = [(-1.0, 1.0), (1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)];

/// The corner a clockwise run starts from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Arrangement {
    #[default]
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
    BottomLeft = 4,
}

impl Arrangement {
    fn start_index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Arrangement {
    type Error = GraphError;
    fn try_from(n: u8) -> GraphResult<Self> {
        match n {
            1 => Ok(Arrangement::TopLeft),
            2 => Ok(Arrangement::TopRight),
            3 => Ok(Arrangement::BottomRight),
            4 => Ok(Arrangement::BottomLeft),
            other => Err(GraphError::InvalidArrangement(other)),
        }
    }
}

impl From<Arrangement> for u8 {
    fn from(a: Arrangement) -> u8 {
        a as u8
    }
}

/// Which corners of an obstacle become graph vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerSettings {
    /// 1 to 4.
    pub corners_visible: u8,
    pub arrangement: Arrangement,
    /// `false` picks diagonal corners (only meaningful with two corners).
    #[serde(default = "consecutive_default")]
    pub consecutive: bool,
}

fn consecutive_default() -> bool {
    true
}

impl CornerSettings {
    pub fn new(corners_visible: u8, arrangement: Arrangement, consecutive: bool) -> GraphResult<Self> {
        let settings = Self { corners_visible, arrangement, consecutive };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !(1..=4).contains(&self.corners_visible) {
            return Err(GraphError::InvalidCornerCount(self.corners_visible));
        }
        Ok(())
    }

    /// Indices into [`CLOCKWISE`] of the exposed corners, in emission order.
    fn corner_indices(&self) -> Vec<usize> {
        let start = self.arrangement.start_index();
        if self.corners_visible == 2 && !self.consecutive {
            return vec![start, (start + 2) % 4];
        }
        (0..self.corners_visible as usize)
            .map(|k| (start + k) % 4)
            .collect()
    }
}

impl Default for CornerSettings {
    fn default() -> Self {
        Self {
            corners_visible: 4,
            arrangement:     Arrangement::TopLeft,
            consecutive:     true,
        }
    }
}

/// An axis-aligned box obstacle with its corner exposure settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Point,
    pub half_extents: Point,
    #[serde(default)]
    pub settings: CornerSettings,
}

impl Obstacle {
    /// A box exposing all four corners.
    ///
    /// # Errors
    /// Rejects negative or non-finite half extents.
    pub fn new(center: Point, half_extents: Point) -> GraphResult<Self> {
        check_non_negative("half extent x", half_extents.x)?;
        check_non_negative("half extent y", half_extents.y)?;
        Ok(Self { center, half_extents, settings: CornerSettings::default() })
    }

    pub fn with_settings(mut self, settings: CornerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The box itself, without any clearance inflation.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.half_extents)
    }

    /// Exposed corner positions pushed out by `radius`.
    ///
    /// # Errors
    /// Rejects a negative radius or invalid corner settings.
    pub fn vertex_locs(&self, radius: f32) -> GraphResult<Vec<Point>> {
        let radius = nav_core::check_radius(radius)?;
        check_non_negative("half extent x", self.half_extents.x)?;
        check_non_negative("half extent y", self.half_extents.y)?;
        self.settings.validate()?;

        let horz = self.half_extents.x + radius;
        let vert = self.half_extents.y + radius;
        Ok(self
            .settings
            .corner_indices()
            .into_iter()
            .map(|i| {
                let (sx, sy) = CLOCKWISE[i];
                Point::new(self.center.x + horz * sx, self.center.y + vert * sy)
            })
            .collect())
    }
}
