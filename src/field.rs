//! Animated scalar fields sampled on a unit-cube grid.
//!
//! These are the density functions an isosurface extractor polls. The active
//! function is picked by [`FieldSampler`]; surface extraction itself happens
//! downstream of this module.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cells per axis of the default sampling grid
pub const DEFAULT_GRID_SIZE: u32 = 16;
/// Field value the isosurface is drawn at
pub const DEFAULT_ISO_LEVEL: f32 = 48.0;

/// Which density function the field evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSampler {
    /// Inverse-square falloff around three moving points
    #[default]
    MovingPoints,
    /// Inverse-square falloff around three moving axis-aligned lines
    MovingLines,
    /// Height field rippling out from the grid center
    Ripple,
}

impl FieldSampler {
    pub const ALL: [FieldSampler; 3] = [
        FieldSampler::MovingPoints,
        FieldSampler::MovingLines,
        FieldSampler::Ripple,
    ];

    /// Next sampler in cycle order, wrapping around
    pub fn next(self) -> Self {
        match self {
            FieldSampler::MovingPoints => FieldSampler::MovingLines,
            FieldSampler::MovingLines => FieldSampler::Ripple,
            FieldSampler::Ripple => FieldSampler::MovingPoints,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldSampler::MovingPoints => "moving-points",
            FieldSampler::MovingLines => "moving-lines",
            FieldSampler::Ripple => "ripple",
        }
    }
}

/// Time-dependent field state shared by all samplers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarField {
    time: f32,
    sources: [Vec3; 3],
}

impl ScalarField {
    pub fn new() -> Self {
        let mut field = Self {
            time: 0.0,
            sources: [Vec3::splat(0.5); 3],
        };
        field.set_time(0.0);
        field
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn sources(&self) -> &[Vec3; 3] {
        &self.sources
    }

    /// Move the sources to their positions at `time`.
    /// Each source oscillates along its own axis around the grid center.
    pub fn set_time(&mut self, time: f32) {
        let offset = 1.0 + time.sin();

        self.time = time;
        self.sources = [Vec3::splat(0.5); 3];
        self.sources[0].x *= offset;
        self.sources[1].y *= offset;
        self.sources[2].z *= offset;
    }

    /// Evaluate the field at `p`. Values blow up to infinity on a source.
    pub fn sample(&self, sampler: FieldSampler, p: Vec3) -> f32 {
        match sampler {
            FieldSampler::MovingPoints => self.moving_points(p),
            FieldSampler::MovingLines => self.moving_lines(p),
            FieldSampler::Ripple => self.ripple(p),
        }
    }

    /// Sample `(cells + 1)^3` grid nodes spanning the unit cube into `out`.
    ///
    /// Node `(ix, iy, iz)` lands at `(ix * n + iy) * n + iz` with
    /// `n = cells + 1`. `out` is cleared first so its allocation is reused
    /// across frames.
    pub fn sample_grid_into(&self, sampler: FieldSampler, cells: u32, out: &mut Vec<f32>) {
        let nodes = cells as usize + 1;
        let step = 1.0 / cells.max(1) as f32;

        out.clear();
        out.reserve(nodes * nodes * nodes);
        for ix in 0..nodes {
            for iy in 0..nodes {
                for iz in 0..nodes {
                    let p = Vec3::new(ix as f32, iy as f32, iz as f32) * step;
                    out.push(self.sample(sampler, p));
                }
            }
        }
    }

    pub fn sample_grid(&self, sampler: FieldSampler, cells: u32) -> Vec<f32> {
        let mut out = Vec::new();
        self.sample_grid_into(sampler, cells, &mut out);
        out
    }

    fn moving_points(&self, p: Vec3) -> f32 {
        self.sources
            .iter()
            .map(|source| 0.5 / p.distance_squared(*source))
            .sum()
    }

    fn moving_lines(&self, p: Vec3) -> f32 {
        let [s0, s1, s2] = self.sources;
        let d0 = p - s0;
        let d1 = p - s1;
        let d2 = p - s2;

        // line 0 runs along z, line 1 along y, line 2 along x
        0.5 / (d0.x * d0.x + d0.y * d0.y)
            + 0.75 / (d1.x * d1.x + d1.z * d1.z)
            + 1.0 / (d2.y * d2.y + d2.z * d2.z)
    }

    fn ripple(&self, p: Vec3) -> f32 {
        let radius = ((0.5 - p.x) * (0.5 - p.x) + (0.5 - p.y) * (0.5 - p.y)).sqrt();
        let phase = 20.0 * (self.time + radius);
        let height = 1.5 + 0.1 * (phase.sin() + phase.cos());

        (height - p.z) * 50.0
    }
}

impl Default for ScalarField {
    fn default() -> Self {
        Self::new()
    }
}
