//! Integer lattice geometry
//!
//! Cells sit on a unit lattice in the X/Z plane (Y is always 0). Connector
//! offsets are measured in half-cell units, so every point that matters
//! (cell centres, cell edges) has exact integer coordinates and no
//! tolerance is needed when comparing them.

use std::fmt::{self, Display};
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Integer 3-vector used for grid cells and half-cell connector points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell on the ground plane
    pub const fn cell(x: i32, z: i32) -> Self {
        Self::new(x, 0, z)
    }

    /// Squared Euclidean distance from the origin
    pub const fn norm_squared(self) -> i64 {
        let (x, y, z) = (self.x as i64, self.y as i64, self.z as i64);
        x * x + y * y + z * z
    }
}

impl Add for GridPos {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for GridPos {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<i32> for GridPos {
    type Output = Self;

    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Clockwise quarter turns about the vertical axis, in `0..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    pub const IDENTITY: Self = Self(0);

    /// Every rotation in search order
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Wraps any step count into `0..=3`
    pub const fn from_steps(steps: u8) -> Self {
        Self(steps % 4)
    }

    pub const fn steps(self) -> u8 {
        self.0
    }

    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    /// Rotate a vector; one quarter turn maps north `(0, 0, 1)` to east `(1, 0, 0)`.
    pub const fn apply(self, v: GridPos) -> GridPos {
        match self.0 {
            0 => v,
            1 => GridPos::new(v.z, v.y, -v.x),
            2 => GridPos::new(-v.x, v.y, -v.z),
            _ => GridPos::new(-v.z, v.y, v.x),
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = String;

    fn try_from(steps: u8) -> Result<Self, Self::Error> {
        if steps < 4 {
            Ok(Self(steps))
        } else {
            Err(format!("rotation must be 0..=3 quarter turns, got {steps}"))
        }
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.0
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Local connector offset in half-cell units
///
/// A valid connector sits on the middle of one edge of its tile, so it is
/// one cardinal step long. The same offset read in whole cells points at
/// the neighbouring cell the connector opens into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Connector(pub GridPos);

impl Connector {
    pub const NORTH: Self = Self(GridPos::cell(0, 1));
    pub const EAST: Self = Self(GridPos::cell(1, 0));
    pub const SOUTH: Self = Self(GridPos::cell(0, -1));
    pub const WEST: Self = Self(GridPos::cell(-1, 0));

    pub const fn offset(self) -> GridPos {
        self.0
    }

    /// Lies on a tile edge midpoint in the ground plane
    pub const fn is_cardinal(self) -> bool {
        let GridPos { x, y, z } = self.0;
        y == 0 && x.abs() + z.abs() == 1
    }

    /// Connector point in world half-cell units for a tile at `cell`
    pub fn world_point(self, cell: GridPos, rotation: Rotation) -> GridPos {
        cell * 2 + rotation.apply(self.0)
    }

    /// Cell this connector opens into for a tile at `cell`
    pub fn neighbor_cell(self, cell: GridPos, rotation: Rotation) -> GridPos {
        cell + rotation.apply(self.0)
    }
}

impl Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
