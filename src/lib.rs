#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Chaos-game fractal renderer
//!
//! An iterated function system is a small family of maps over the
//! plane; the chaos game renders its attractor by holding one running
//! point, repeatedly picking a map from the family at random, and
//! marking each point the game passes through on a pixel grid.  Run
//! long enough, the marked cells trace out the attractor.
//!
//! The crate is split the way the data flows: `variations` holds the
//! map family and the selection pool, `game` holds the iteration
//! loop, and `raster` holds the pixel grid and the plane-to-pixel
//! mapping.  The library produces a single-channel intensity buffer
//! and nothing else; the accompanying binary turns that buffer into a
//! graymap on disk.

extern crate rand;

pub mod game;
pub mod raster;
pub mod variations;

pub use game::ChaosGame;
pub use raster::Raster;
pub use variations::{Point, Registry, Variation};
