//! Mapping between byte values and cells of the 16x16 grid.
//!
//! The high nibble of a byte is the column (`x`), the low nibble the row
//! (`y`). A renderer walks [`all_cells`] and fills every cell whose byte is
//! active in a filter or item hash.
use crate::error::{BloomGridError, Result};
use crate::sparse_hash::SparseHash;
use serde::{Deserialize, Serialize};

pub const GRID_SIZE: u8 = 16;

/// A cell of the grid. Both axes are always below [`GRID_SIZE`]; the only
/// ways in are [`GridCoordinate::new`], [`coordinates_from_byte`] and
/// deserialization, which checks the range too.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawCoordinate")]
pub struct GridCoordinate {
    x: u8,
    y: u8,
}

#[derive(Deserialize)]
struct RawCoordinate {
    x: u8,
    y: u8,
}

impl TryFrom<RawCoordinate> for GridCoordinate {
    type Error = BloomGridError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        GridCoordinate::new(raw.x, raw.y)
    }
}

impl GridCoordinate {
    pub fn new(x: u8, y: u8) -> Result<Self> {
        check_range(x, y)?;
        Ok(Self { x, y })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn to_byte(self) -> u8 {
        self.y | (self.x << 4)
    }
}

impl From<GridCoordinate> for (u8, u8) {
    fn from(coord: GridCoordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl From<u8> for GridCoordinate {
    fn from(byte: u8) -> Self {
        coordinates_from_byte(byte)
    }
}

fn check_range(x: u8, y: u8) -> Result<()> {
    if x >= GRID_SIZE || y >= GRID_SIZE {
        return Err(BloomGridError::CoordinateOutOfRange {
            x,
            y,
            size: GRID_SIZE,
        });
    }
    Ok(())
}

pub fn coordinates_from_byte(b: u8) -> GridCoordinate {
    GridCoordinate {
        x: (b >> 4) & 0x0F,
        y: b & 0x0F,
    }
}

pub fn byte_for_coordinate(x: u8, y: u8) -> Result<u8> {
    Ok(GridCoordinate::new(x, y)?.to_byte())
}

/// Every cell of the grid, column by column.
pub fn all_cells() -> impl Iterator<Item = GridCoordinate> {
    (0..GRID_SIZE)
        .flat_map(|x| (0..GRID_SIZE).map(move |y| GridCoordinate { x, y }))
}

/// Something a renderer can draw on the grid.
pub trait ActiveCells {
    fn is_active_byte(&self, byte: u8) -> bool;

    fn is_active(&self, x: u8, y: u8) -> Result<bool> {
        Ok(self.is_active_byte(byte_for_coordinate(x, y)?))
    }

    /// Active cells in [`all_cells`] order.
    fn active_coordinates(&self) -> Vec<GridCoordinate> {
        all_cells()
            .filter(|cell| self.is_active_byte(cell.to_byte()))
            .collect()
    }
}

impl ActiveCells for SparseHash {
    fn is_active_byte(&self, byte: u8) -> bool {
        self.contains(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_split() {
        assert_eq!(coordinates_from_byte(0xF0), GridCoordinate { x: 15, y: 0 });
        assert_eq!(coordinates_from_byte(0x0F), GridCoordinate { x: 0, y: 15 });
        let pair: (u8, u8) = coordinates_from_byte(0xA5).into();
        assert_eq!(pair, (10, 5));
        assert_eq!(byte_for_coordinate(15, 0).unwrap(), 0xF0);
        assert_eq!(byte_for_coordinate(0, 15).unwrap(), 0x0F);
    }

    #[test]
    fn test_byte_round_trip() {
        for b in 0..=255u8 {
            let coord = coordinates_from_byte(b);
            assert_eq!(byte_for_coordinate(coord.x, coord.y).unwrap(), b);
        }
    }

    #[test]
    fn test_coordinate_round_trip() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let b = byte_for_coordinate(x, y).unwrap();
                assert_eq!(coordinates_from_byte(b), GridCoordinate { x, y });
            }
        }
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let err = byte_for_coordinate(16, 0).unwrap_err();
        assert_eq!(
            err,
            BloomGridError::CoordinateOutOfRange {
                x: 16,
                y: 0,
                size: 16
            }
        );
        assert!(err.is_invalid_argument());
        assert!(GridCoordinate::new(3, 255).is_err());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let result = serde_json::from_str::<GridCoordinate>(r#"{"x":20,"y":3}"#);
        let err = result.expect_err("x = 20 is off the grid");
        assert!(err.to_string().contains("outside the 16x16 grid"));

        assert!(serde_json::from_str::<GridCoordinate>(r#"{"x":3,"y":16}"#).is_err());

        let cell: GridCoordinate = serde_json::from_str(r#"{"x":4,"y":3}"#).unwrap();
        assert_eq!((cell.x(), cell.y()), (4, 3));
        assert_eq!(cell.to_byte(), 0x43);
    }

    #[test]
    fn test_serialize_shape() {
        let cell = GridCoordinate::new(10, 5).unwrap();
        assert_eq!(serde_json::to_string(&cell).unwrap(), r#"{"x":10,"y":5}"#);
    }

    #[test]
    fn test_all_cells_covers_every_byte_once() {
        let bytes: Vec<u8> = all_cells().map(GridCoordinate::to_byte).collect();
        assert_eq!(bytes.len(), 256);
        assert_eq!(bytes, (0..=255u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_active_coordinates_of_sparse_hash() {
        let hash: SparseHash = [0x00u8, 0x21, 0xFF].into_iter().collect();
        assert_eq!(
            hash.active_coordinates(),
            vec![
                GridCoordinate { x: 0, y: 0 },
                GridCoordinate { x: 2, y: 1 },
                GridCoordinate { x: 15, y: 15 },
            ]
        );
        assert!(hash.is_active(2, 1).unwrap());
        assert!(!hash.is_active(1, 2).unwrap());
        assert!(hash.is_active(16, 1).is_err());
    }
}
