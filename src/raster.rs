//! Contains the Raster struct, which owns the single-channel
//! intensity grid and the fixed affine mapping from the continuous
//! plane onto it.  The mapping is a plain scale-and-offset, the same
//! constants regardless of how big the grid is; points that land
//! outside the grid (including non-finite ones) are silently dropped,
//! which is how the early burn-in iterations of the chaos game get
//! absorbed.

// Plane-to-pixel mapping: floor(coordinate * SCALE) + CENTER, for
// both axes.  Deliberately not derived from the grid dimensions.
const SCALE: f64 = 350.0;
const CENTER: f64 = 200.0;

/// An unmarked cell.
pub const BACKGROUND: u8 = 0;
/// A marked cell.  Marking saturates; a cell hit twice looks exactly
/// like a cell hit once.
pub const FOREGROUND: u8 = 255;

/// A fixed-size single-channel pixel grid.  Created once, mutated
/// only through `mark`, then handed read-only to whatever displays or
/// saves it.
///
/// One quirk worth knowing about: the x-coordinate maps to the
/// *first* subscript and is bounded by `width`, the y-coordinate to
/// the second, bounded by `height`.  That is the convention the
/// attractor was tuned under, so it stays.  The grid is allocated to
/// match, which keeps the indexing in range for any width and height.
#[derive(Debug)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Raster {
    /// Constructor.  Every cell starts at the background value.
    pub fn new(width: usize, height: usize) -> Raster {
        Raster {
            width,
            height,
            cells: vec![BACKGROUND; width * height],
        }
    }

    /// First-subscript bound of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Second-subscript bound of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Map a point to a cell and mark it.  Returns whether the point
    /// was in bounds; out-of-bounds and non-finite points leave the
    /// grid untouched.  Both bounds are exclusive at zero, matching
    /// the mapping the image was tuned under.
    pub fn mark(&mut self, x: f64, y: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let px = (x * SCALE).floor() + CENTER;
        let py = (y * SCALE).floor() + CENTER;
        if px > 0.0 && px < (self.width as f64) && py > 0.0 && py < (self.height as f64) {
            let offset = (px as usize) * self.height + (py as usize);
            self.cells[offset] = FOREGROUND;
            true
        } else {
            false
        }
    }

    /// The cell at (px, py), first subscript then second.
    pub fn at(&self, px: usize, py: usize) -> u8 {
        self.cells[px * self.height + py]
    }

    /// The whole grid, row-major by first subscript, for encoding or
    /// display.
    pub fn pixels(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::{INFINITY, NAN, NEG_INFINITY};

    fn untouched(r: &Raster) -> bool {
        r.pixels().iter().all(|&c| c == BACKGROUND)
    }

    #[test]
    fn origin_lands_at_the_center_offset() {
        let mut r = Raster::new(1000, 1000);
        assert!(r.mark(0.0, 0.0));
        assert_eq!(r.at(200, 200), FOREGROUND);
    }

    #[test]
    fn far_points_are_dropped() {
        let mut r = Raster::new(1000, 1000);
        // floor(3 * 350) + 200 = 1250, past the bound.
        assert!(!r.mark(3.0, 3.0));
        assert!(untouched(&r));
    }

    #[test]
    fn negative_points_are_dropped() {
        let mut r = Raster::new(1000, 1000);
        assert!(!r.mark(-1.0, -1.0));
        assert!(!r.mark(0.0, -0.6));
        assert!(untouched(&r));
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let mut r = Raster::new(1000, 1000);
        assert!(!r.mark(NAN, 0.0));
        assert!(!r.mark(0.0, INFINITY));
        assert!(!r.mark(NEG_INFINITY, NAN));
        assert!(untouched(&r));
    }

    #[test]
    fn marking_saturates() {
        let mut r = Raster::new(1000, 1000);
        assert!(r.mark(0.5, 0.5));
        let once: Vec<u8> = r.pixels().to_vec();
        assert!(r.mark(0.5, 0.5));
        assert_eq!(r.pixels(), &once[..]);
    }

    #[test]
    fn bounds_follow_the_subscript_swap() {
        // x is checked against width, y against height.
        let mut r = Raster::new(400, 1000);
        assert!(!r.mark(1.0, 0.0)); // px = 550, over width
        assert!(r.mark(0.0, 1.0)); // py = 550, within height
        assert_eq!(r.at(200, 550), FOREGROUND);
    }
}
