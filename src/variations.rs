// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Variation family, the nonlinear point maps that the
//! chaos game draws from, and the Registry, the ordered pool the game
//! actually selects out of.  Not every variation the crate defines is
//! wired into the default pool; the catalogue and the pool are
//! deliberately separate values.

/// A point on the real plane.  No identity beyond its value; copy it
/// freely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// One member of the iterated function system.  Each variant is a
/// pure, deterministic map from a point to a point; the ones that
/// carry fields fix those at construction and never change them.
///
/// The radius-based variants divide by r = sqrt(x² + y²) and so blow
/// up at the origin.  That is allowed: a non-finite coordinate simply
/// never lands on the raster, and the game carries it forward until a
/// later variation pulls it back onto the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Variation {
    /// (x, y).  Useful mostly as a pool filler and in tests.
    Identity,
    /// Halfway between the input and a fixed anchor:
    /// ((x + a)/2, (y + b)/2).
    Midpoint {
        /// Anchor x-coordinate.
        x: f64,
        /// Anchor y-coordinate.
        y: f64,
    },
    /// (sin x, sin y).
    Sinusoidal,
    /// (x/r², y/r²).
    Spherical,
    /// (x·sin r² − y·cos r², x·cos r² + y·sin r²).
    Swirl,
    /// The same formula as Swirl under a second name, so a pool can
    /// hold both slots and weight the shape twice.
    Whorl,
    /// Evaluates (sin a / cos b, tan b) over its *stored* anchor,
    /// ignoring the incoming point entirely.  With the default (0, 0)
    /// anchor this pins the game back to the origin whenever it is
    /// drawn, which turns out to matter to the attractor; see the
    /// design notes before "fixing" it.
    PolarTangent {
        /// Anchor x-coordinate.
        x: f64,
        /// Anchor y-coordinate.
        y: f64,
    },
    /// The Spherical formula under a second name; a distinct slot so
    /// the default pool selects it twice as often.
    InverseSquare,
    /// With θ = atan(x/y): (cos θ / r + sin r, sin θ / r − cos r).
    /// Note the quotient atan, not atan2.
    PolarExp,
}

impl Variation {
    /// Apply the map to a point.  Total over the finite plane in
    /// principle; division by a zero radius propagates as non-finite
    /// coordinates rather than an error.
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Variation::Identity => p,
            Variation::Midpoint { x, y } => Point::new((p.x + x) / 2.0, (p.y + y) / 2.0),
            Variation::Sinusoidal => Point::new(p.x.sin(), p.y.sin()),
            Variation::Spherical | Variation::InverseSquare => {
                let r2 = p.x * p.x + p.y * p.y;
                Point::new(p.x / r2, p.y / r2)
            }
            Variation::Swirl | Variation::Whorl => {
                let r2 = p.x * p.x + p.y * p.y;
                Point::new(
                    p.x * r2.sin() - p.y * r2.cos(),
                    p.x * r2.cos() + p.y * r2.sin(),
                )
            }
            // Stored anchor, not the incoming point.
            Variation::PolarTangent { x, y } => Point::new(x.sin() / y.cos(), y.tan()),
            Variation::PolarExp => {
                let r = (p.x * p.x + p.y * p.y).sqrt();
                let theta = (p.x / p.y).atan();
                Point::new(theta.cos() / r + r.sin(), theta.sin() / r - r.cos())
            }
        }
    }
}

/// An ordered, non-empty pool of variations.  The game selects from
/// it by uniform random index, so a variation that appears in two
/// slots is drawn twice as often.  Built once, immutable afterward;
/// order only matters if you care about reproducing a particular
/// selection sequence.
#[derive(Clone, Debug)]
pub struct Registry(Vec<Variation>);

impl Registry {
    /// Constructor.  Rejects an empty pool, since a chaos game with
    /// nothing to draw from has nowhere to go.
    pub fn new(pool: Vec<Variation>) -> Result<Registry, String> {
        if pool.is_empty() {
            return Err("The selection pool needs at least one variation.".to_string());
        }
        Ok(Registry(pool))
    }

    /// Every variation this crate defines, anchors included.  A
    /// strict superset of the default pool.
    pub fn catalogue() -> Vec<Variation> {
        vec![
            Variation::Midpoint { x: -1.0, y: 1.0 },
            Variation::Midpoint { x: 1.0, y: 0.0 },
            Variation::Midpoint { x: -1.0, y: -1.0 },
            Variation::Identity,
            Variation::Sinusoidal,
            Variation::Spherical,
            Variation::Swirl,
            Variation::Whorl,
            Variation::PolarTangent { x: 0.0, y: 0.0 },
            Variation::InverseSquare,
            Variation::PolarExp,
        ]
    }

    /// The curated pool the stock renderer plays with.  Spherical
    /// effectively appears twice (once as InverseSquare), which
    /// biases the draw toward it.
    pub fn default_pool() -> Registry {
        Registry(vec![
            Variation::Midpoint { x: -1.0, y: 1.0 },
            Variation::Spherical,
            Variation::Whorl,
            Variation::PolarTangent { x: 0.0, y: 0.0 },
            Variation::InverseSquare,
            Variation::PolarExp,
        ])
    }

    /// Number of slots in the pool.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the constructor refuses an empty pool.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The variation in a given slot.  Callers draw the index from a
    /// uniform distribution over `0..len()`.
    pub fn get(&self, index: usize) -> Variation {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_its_input() {
        let p = Point::new(-3.25, 17.5);
        assert_eq!(Variation::Identity.apply(p), p);
    }

    #[test]
    fn midpoint_halves_toward_its_anchor() {
        let m = Variation::Midpoint { x: -1.0, y: 1.0 };
        assert_eq!(m.apply(Point::new(1.0, 1.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn spherical_fixes_the_unit_circle() {
        assert_eq!(
            Variation::Spherical.apply(Point::new(1.0, 0.0)),
            Point::new(1.0, 0.0)
        );
        assert_eq!(
            Variation::Spherical.apply(Point::new(2.0, 0.0)),
            Point::new(0.5, 0.0)
        );
    }

    #[test]
    fn inverse_square_matches_spherical() {
        let p = Point::new(0.3, -1.7);
        assert_eq!(
            Variation::InverseSquare.apply(p),
            Variation::Spherical.apply(p)
        );
    }

    #[test]
    fn whorl_matches_swirl() {
        let p = Point::new(1.25, 0.5);
        assert_eq!(Variation::Whorl.apply(p), Variation::Swirl.apply(p));
    }

    #[test]
    fn swirl_on_the_unit_x_axis() {
        let q = Variation::Swirl.apply(Point::new(1.0, 0.0));
        assert_eq!(q, Point::new(1.0_f64.sin(), 1.0_f64.cos()));
    }

    #[test]
    fn polar_tangent_ignores_its_input() {
        let v = Variation::PolarTangent { x: 0.0, y: 0.0 };
        assert_eq!(v.apply(Point::new(5.0, 7.0)), Point::new(0.0, 0.0));
        assert_eq!(v.apply(Point::new(-0.1, 1e9)), Point::new(0.0, 0.0));
    }

    #[test]
    fn polar_exp_degenerates_at_the_origin() {
        let q = Variation::PolarExp.apply(Point::new(0.0, 0.0));
        assert!(!q.x.is_finite() || !q.y.is_finite());
    }

    #[test]
    fn sinusoidal_stays_in_the_unit_box() {
        let q = Variation::Sinusoidal.apply(Point::new(1e6, -1e6));
        assert!(q.x.abs() <= 1.0 && q.y.abs() <= 1.0);
    }

    #[test]
    fn registry_rejects_an_empty_pool() {
        assert!(Registry::new(vec![]).is_err());
    }

    #[test]
    fn default_pool_is_drawn_from_the_catalogue() {
        let pool = Registry::default_pool();
        let all = Registry::catalogue();
        assert_eq!(pool.len(), 6);
        for i in 0..pool.len() {
            assert!(all.contains(&pool.get(i)));
        }
    }
}
