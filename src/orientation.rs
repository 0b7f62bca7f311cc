//! Logical to physical coordinate transform
//!
//! Rotation is applied first, mirroring second, both against the memory
//! extents of the planes.

use crate::canvas::Dimensions;
use crate::error::Error;

/// Display rotation, clockwise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// All rotations in ascending order
    pub const ALL: [Rotation; 4] = [
        Rotation::Rotate0,
        Rotation::Rotate90,
        Rotation::Rotate180,
        Rotation::Rotate270,
    ];
}

impl TryFrom<u16> for Rotation {
    type Error = Error;

    /// Convert from degrees
    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Rotate0),
            90 => Ok(Rotation::Rotate90),
            180 => Ok(Rotation::Rotate180),
            270 => Ok(Rotation::Rotate270),
            _ => Err(Error::InvalidParameter(
                "rotation must be 0, 90, 180 or 270 degrees",
            )),
        }
    }
}

/// Display mirroring, applied after rotation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mirror {
    /// No mirroring
    #[default]
    None,
    /// Flip along the vertical axis (X = W - X - 1)
    Horizontal,
    /// Flip along the horizontal axis (Y = H - Y - 1)
    Vertical,
    /// Flip both axes, a reflection through the origin
    Both,
}

impl Mirror {
    /// All mirror modes
    pub const ALL: [Mirror; 4] = [Mirror::None, Mirror::Horizontal, Mirror::Vertical, Mirror::Both];
}

impl TryFrom<u8> for Mirror {
    type Error = Error;

    /// Convert from the bit code: bit 0 horizontal, bit 1 vertical
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Mirror::None),
            0x01 => Ok(Mirror::Horizontal),
            0x02 => Ok(Mirror::Vertical),
            0x03 => Ok(Mirror::Both),
            _ => Err(Error::InvalidParameter("mirror code must be 0..=3")),
        }
    }
}

/// Rotation and mirror applied to every pixel write
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orientation {
    /// Rotation, applied first
    pub rotation: Rotation,
    /// Mirror, applied to the rotated coordinate
    pub mirror: Mirror,
}

/// Why a coordinate could not be transformed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// Outside the logical canvas
    Logical,
    /// Rotated/mirrored result lands outside plane memory
    Physical {
        /// Physical x that was rejected
        x: i32,
        /// Physical y that was rejected
        y: i32,
    },
}

impl Orientation {
    /// Create an orientation
    pub const fn new(rotation: Rotation, mirror: Mirror) -> Self {
        Self { rotation, mirror }
    }

    /// Map a logical coordinate to a physical plane coordinate.
    pub fn transform(&self, x: i32, y: i32, dims: &Dimensions) -> Result<(u32, u32), TransformError> {
        if x < 0 || y < 0 || x >= i32::from(dims.width) || y >= i32::from(dims.height) {
            return Err(TransformError::Logical);
        }

        let wm = i32::from(dims.width_memory);
        let hm = i32::from(dims.height_memory);

        let (mut nx, mut ny) = match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (wm - y - 1, x),
            Rotation::Rotate180 => (wm - x - 1, hm - y - 1),
            Rotation::Rotate270 => (y, hm - x - 1),
        };

        match self.mirror {
            Mirror::None => {}
            Mirror::Horizontal => nx = wm - nx - 1,
            Mirror::Vertical => ny = hm - ny - 1,
            Mirror::Both => {
                nx = wm - nx - 1;
                ny = hm - ny - 1;
            }
        }

        if nx < 0 || ny < 0 || nx >= wm || ny >= hm {
            return Err(TransformError::Physical { x: nx, y: ny });
        }
        Ok((nx as u32, ny as u32))
    }
}

#[rustfmt::skip]
//returns index position in the plane and the bit mask inside that byte
pub(crate) fn find_position(x: u32, y: u32, width_byte: usize) -> (usize, u8) {
    (
        x as usize / 8 + width_byte * y as usize,
        0x80 >> (x % 8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn dims(width: u16, height: u16) -> Dimensions {
        Dimensions::new(width, height)
    }

    #[test]
    fn identity_for_rotate0_without_mirror() {
        let d = dims(40, 24);
        let o = Orientation::default();
        for y in 0..24 {
            for x in 0..40 {
                assert_eq!(o.transform(x, y, &d), Ok((x as u32, y as u32)));
            }
        }
    }

    #[test]
    fn rotation_formulas() {
        let d = dims(16, 16);
        let at = |r| Orientation::new(r, Mirror::None).transform(2, 5, &d);
        assert_eq!(at(Rotation::Rotate90), Ok((16 - 5 - 1, 2)));
        assert_eq!(at(Rotation::Rotate180), Ok((16 - 2 - 1, 16 - 5 - 1)));
        assert_eq!(at(Rotation::Rotate270), Ok((5, 16 - 2 - 1)));
    }

    #[test]
    fn mirror_applies_after_rotation() {
        let d = dims(16, 16);
        let o = Orientation::new(Rotation::Rotate90, Mirror::Horizontal);
        // rotate: (10, 2) -> mirror x: (5, 2)
        assert_eq!(o.transform(2, 5, &d), Ok((5, 2)));
        let o = Orientation::new(Rotation::Rotate0, Mirror::Both);
        assert_eq!(o.transform(0, 0, &d), Ok((15, 15)));
    }

    #[test]
    fn every_combination_is_injective() {
        let d = dims(24, 24);
        for rotation in Rotation::ALL {
            for mirror in Mirror::ALL {
                let o = Orientation::new(rotation, mirror);
                let mut seen = BTreeSet::new();
                for y in 0..24 {
                    for x in 0..24 {
                        let p = o.transform(x, y, &d).unwrap();
                        assert!(seen.insert(p), "{rotation:?}/{mirror:?} collides at {p:?}");
                    }
                }
                assert_eq!(seen.len(), 24 * 24);
            }
        }
    }

    #[test]
    fn logical_bounds_are_exclusive() {
        let d = dims(10, 10);
        let o = Orientation::default();
        assert_eq!(o.transform(10, 0, &d), Err(TransformError::Logical));
        assert_eq!(o.transform(0, 10, &d), Err(TransformError::Logical));
        assert_eq!(o.transform(-1, 0, &d), Err(TransformError::Logical));
    }

    #[test]
    fn rotated_point_outside_memory_is_physical_violation() {
        // wide canvas: rotating by 90 maps x onto the short memory axis
        let d = dims(32, 8);
        let o = Orientation::new(Rotation::Rotate90, Mirror::None);
        assert!(matches!(
            o.transform(20, 0, &d),
            Err(TransformError::Physical { .. })
        ));
        assert_eq!(o.transform(3, 0, &d), Ok((31, 3)));
    }

    #[test]
    fn raw_conversions() {
        assert_eq!(Rotation::try_from(270), Ok(Rotation::Rotate270));
        assert!(Rotation::try_from(45).is_err());
        assert_eq!(Mirror::try_from(3), Ok(Mirror::Both));
        assert!(matches!(Mirror::try_from(4), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn find_position_is_msb_first() {
        assert_eq!(find_position(0, 0, 2), (0, 0x80));
        assert_eq!(find_position(7, 0, 2), (0, 0x01));
        assert_eq!(find_position(8, 1, 2), (3, 0x80));
    }
}
