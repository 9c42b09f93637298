//! Procedural point-cloud models.
//!
//! Mesh-file loading is out of scope; each scene cloud is generated in
//! code and then put through the same normalization the mesh pipeline
//! applies — center at the vertex mean, scale so the largest |coordinate|
//! hits a per-model target radius.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use std::f32::consts::PI;

// ════════════════════════════════════════════════════════════════════════════
// PointCloud
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<(f32, f32, f32)>,
}

impl PointCloud {
    /// Center at the mean and scale the largest |coordinate| to `radius`.
    pub fn normalized(mut points: Vec<(f32, f32, f32)>, radius: f32) -> Self {
        if points.is_empty() {
            return PointCloud { points };
        }
        let n = points.len() as f32;
        let mut mean = (0.0, 0.0, 0.0);
        for p in &points {
            mean.0 += p.0;
            mean.1 += p.1;
            mean.2 += p.2;
        }
        mean = (mean.0 / n, mean.1 / n, mean.2 / n);

        let mut max_coord: f32 = 0.0;
        for p in &mut points {
            p.0 -= mean.0;
            p.1 -= mean.1;
            p.2 -= mean.2;
            max_coord = max_coord.max(p.0.abs()).max(p.1.abs()).max(p.2.abs());
        }
        if max_coord > 0.0 {
            let scale = radius / max_coord;
            for p in &mut points {
                p.0 *= scale;
                p.1 *= scale;
                p.2 *= scale;
            }
        }
        PointCloud { points }
    }

    pub fn points(&self) -> &[(f32, f32, f32)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Generators
// ════════════════════════════════════════════════════════════════════════════

/// Lumpy elongated blob — the bacteria body.
pub fn bacteria(count: usize, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let theta = rng.gen_range(0.0..PI);
        let phi = rng.gen_range(0.0..2.0 * PI);
        let noise: f32 = rng.sample::<f32, _>(StandardNormal) * 0.08;
        let r = 1.0 + noise;
        points.push((
            1.4 * r * theta.sin() * phi.cos(),
            0.7 * r * theta.sin() * phi.sin(),
            0.9 * r * theta.cos(),
        ));
    }
    PointCloud::normalized(points, 8.0)
}

/// One strand of the double helix; `phase` π apart gives the second strand.
fn helix_strand(count: usize, turns: f32, phase: f32, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / count.max(1) as f32;
        let angle = t * turns * 2.0 * PI + phase;
        let jitter: f32 = rng.sample::<f32, _>(StandardNormal) * 0.04;
        points.push((
            angle.cos() + jitter,
            angle.sin() + jitter,
            (t - 0.5) * 6.0,
        ));
    }
    PointCloud::normalized(points, 10.0)
}

/// The two DNA strands, half a turn out of phase.
pub fn dna_strands(count: usize, seed: u64) -> (PointCloud, PointCloud) {
    (
        helix_strand(count, 3.0, 0.0, seed),
        helix_strand(count, 3.0, PI, seed.wrapping_add(1)),
    )
}

/// Compact globular cloud — the polymerase enzyme.
pub fn enzyme(count: usize, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let p: (f32, f32, f32) = (
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        );
        points.push(p);
    }
    PointCloud::normalized(points, 1.5)
}

/// Short helix segment, laid flat — the substrate the enzyme docks onto
/// and the template PCR copies.
pub fn dna_fragment(count: usize, radius: f32, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / count.max(1) as f32;
        let angle = t * 2.0 * PI + if i % 2 == 0 { 0.0 } else { PI };
        let jitter: f32 = rng.sample::<f32, _>(StandardNormal) * 0.05;
        // Laid along X so it reads as lying flat under the enzyme.
        points.push(((t - 0.5) * 4.0, angle.cos() * 0.5 + jitter, angle.sin() * 0.5));
    }
    PointCloud::normalized(points, radius)
}

/// Open ring — the helicase that travels along the strands.
pub fn helicase(count: usize, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let angle = i as f32 / count.max(1) as f32 * 2.0 * PI;
        let jitter: f32 = rng.sample::<f32, _>(StandardNormal) * 0.06;
        points.push((angle.cos() + jitter, angle.sin() + jitter, jitter));
    }
    PointCloud::normalized(points, 1.1)
}

// ════════════════════════════════════════════════════════════════════════════
// SceneModels
// ════════════════════════════════════════════════════════════════════════════

/// Every cloud the four scenes need, generated once at startup.
pub struct SceneModels {
    pub bacteria: PointCloud,
    pub strand_a: PointCloud,
    pub strand_b: PointCloud,
    pub enzyme: PointCloud,
    pub substrate: PointCloud,
    pub pcr_fragment: PointCloud,
    pub helicase: PointCloud,
}

impl SceneModels {
    pub fn generate(points_per_model: usize) -> Self {
        let n = points_per_model.max(64);
        let (strand_a, strand_b) = dna_strands(n / 2, 11);
        SceneModels {
            bacteria: bacteria(n, 5),
            strand_a,
            strand_b,
            enzyme: enzyme(n / 3, 17),
            substrate: dna_fragment(n / 2, 4.0, 23),
            // Small cloud: it is drawn once per live fragment, up to 200×.
            pcr_fragment: dna_fragment((n / 16).clamp(24, 96), 2.0, 29),
            helicase: helicase(n / 6, 31),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(points: &[(f32, f32, f32)]) -> (f32, f32, f32) {
        let n = points.len() as f32;
        let mut m = (0.0, 0.0, 0.0);
        for p in points {
            m.0 += p.0 / n;
            m.1 += p.1 / n;
            m.2 += p.2 / n;
        }
        m
    }

    fn max_abs(points: &[(f32, f32, f32)]) -> f32 {
        points
            .iter()
            .fold(0.0f32, |m, p| m.max(p.0.abs()).max(p.1.abs()).max(p.2.abs()))
    }

    #[test]
    fn normalization_centers_and_scales() {
        let raw = vec![(10.0, 0.0, 0.0), (14.0, 2.0, -2.0), (12.0, -2.0, 2.0)];
        let cloud = PointCloud::normalized(raw, 8.0);
        let m = mean(cloud.points());
        assert!(m.0.abs() < 1e-4 && m.1.abs() < 1e-4 && m.2.abs() < 1e-4);
        assert!((max_abs(cloud.points()) - 8.0).abs() < 1e-3);
    }

    #[test]
    fn normalization_survives_degenerate_input() {
        let cloud = PointCloud::normalized(vec![(3.0, 3.0, 3.0)], 5.0);
        assert_eq!(cloud.len(), 1);
        // A single point collapses to the origin; no NaN from the 0 extent.
        let p = cloud.points()[0];
        assert!(p.0.is_finite() && p.1.is_finite() && p.2.is_finite());
    }

    #[test]
    fn generators_are_deterministic_per_seed() {
        let a = bacteria(256, 5);
        let b = bacteria(256, 5);
        assert_eq!(a.points()[17], b.points()[17]);
    }

    #[test]
    fn scene_models_have_expected_radii() {
        let scene = SceneModels::generate(512);
        assert!((max_abs(scene.bacteria.points()) - 8.0).abs() < 1e-3);
        assert!((max_abs(scene.strand_a.points()) - 10.0).abs() < 1e-3);
        assert!((max_abs(scene.enzyme.points()) - 1.5).abs() < 1e-3);
        assert!((max_abs(scene.pcr_fragment.points()) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn pcr_fragment_stays_small() {
        let scene = SceneModels::generate(4096);
        assert!(scene.pcr_fragment.len() <= 96);
    }
}
