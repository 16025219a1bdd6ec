//! Layout engine selection.
//!
//! Each [`LayoutMethod`] is backed by one [`Engine`]. Engines are stateless;
//! all randomness comes from the generator passed to
//! [`Engine::calculate`], so a seeded generator gives repeatable layouts.

mod banded;
mod grid;
mod layered;
mod random;

use rand::{Rng, rngs::StdRng};

use irscope_core::geometry::Point;

use super::{LayoutMap, LayoutMethod};
use crate::structure::NodeGraph;

/// Lowest coordinate used by the scattering engines.
const MARGIN_MIN: f32 = 0.05;
/// Highest coordinate used by the scattering engines.
const MARGIN_MAX: f32 = 0.95;

/// Trait defining the interface for layout engines
pub trait Engine {
    /// Calculate a position in the unit square for every node of `graph`.
    fn calculate(&self, graph: &NodeGraph<'_>, rng: &mut StdRng) -> LayoutMap;
}

/// Create the engine implementing `method`.
pub fn for_method(method: LayoutMethod) -> Box<dyn Engine> {
    match method {
        LayoutMethod::Random => Box::new(random::Engine),
        LayoutMethod::Grid => Box::new(grid::Engine),
        LayoutMethod::Proto1 => Box::new(banded::Engine),
        LayoutMethod::Proto2 => Box::new(layered::Engine),
    }
}

/// A uniform point inside the margins.
fn scatter(rng: &mut StdRng) -> Point {
    Point::new(
        rng.random_range(MARGIN_MIN..=MARGIN_MAX),
        rng.random_range(MARGIN_MIN..=MARGIN_MAX),
    )
}
