// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chaos game proper.  Holds one running point, and on every
//! iteration: draws a variation from the pool uniformly at random,
//! warps the running point through a fixed linear recombination,
//! applies the variation to the warped point, marks the *pre-warp*
//! point on the raster, and adopts the variation's output as the new
//! running point.
//!
//! Two policies here are load-bearing and must not be "improved":
//! the raster is marked before the warp, and the new point is adopted
//! whether or not the mark landed in bounds.  Dropping an
//! out-of-bounds point's mark but keeping the point is what lets the
//! game wander back onto the attractor instead of getting stuck.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

use raster::Raster;
use variations::{Point, Registry};

/// Where every game starts.
const SEED: Point = Point { x: 0.5, y: 0.5 };

/// A chaos game over one selection pool and one raster.  The only
/// mutable state across iterations is the running point.
pub struct ChaosGame {
    pool: Registry,
    raster: Raster,
    current: Point,
}

impl ChaosGame {
    /// Constructor.  Takes the pool to select from and the raster to
    /// mark; the running point starts at the fixed seed.
    pub fn new(pool: Registry, raster: Raster) -> ChaosGame {
        ChaosGame {
            pool,
            raster,
            current: SEED,
        }
    }

    /// One iteration of the game.
    fn step<R: Rng>(&mut self, rng: &mut R, slots: &Uniform<usize>) {
        let variation = self.pool.get(slots.sample(rng));
        // The fixed recombination applied before every variation.
        let warped = Point::new(
            0.5 * self.current.x + 0.4 * self.current.y + 0.1,
            0.32 * self.current.x + 0.7 * self.current.y + 0.23,
        );
        let next = variation.apply(warped);
        self.raster.mark(self.current.x, self.current.y);
        self.current = next;
    }

    /// Play the game for a fixed number of iterations.  Never fails
    /// and never terminates early; a degenerate point just stops
    /// producing marks until the pool pulls it back.
    pub fn run(&mut self, iterations: u64) {
        self.run_until(iterations, &AtomicBool::new(false));
    }

    /// Like `run`, but checks a stop flag between iterations, so a
    /// caller can cut a very long render short from another thread.
    /// Stopping never leaves a half-marked raster; an iteration
    /// either happened or it didn't.
    pub fn run_until(&mut self, iterations: u64, stop: &AtomicBool) {
        let mut rng = rand::thread_rng();
        let slots = Uniform::from(0..self.pool.len());
        for _ in 0..iterations {
            if stop.load(Ordering::Relaxed) {
                break;
            }
            self.step(&mut rng, &slots);
        }
    }

    /// Where the running point is right now.
    pub fn position(&self) -> Point {
        self.current
    }

    /// A read-only look at the raster, marks and all.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Give up the raster once the game is over.
    pub fn into_raster(self) -> Raster {
        self.raster
    }
}
