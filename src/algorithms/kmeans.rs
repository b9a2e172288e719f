//! K-means clustering of planar points.
//!
//! ## Purpose
//!
//! This module partitions 2-D points into `k` clusters by Lloyd's iteration
//! (customer segmentation by spend and household). Records of any type that
//! implement `Planar` are accepted and returned grouped by cluster with their
//! passthrough fields intact.
//!
//! ## Design notes
//!
//! * **Snapshots**: Each iteration builds a fresh label vector and a fresh
//!   centroid vector from the previous ones; nothing is aliased across
//!   iterations.
//! * **Termination**: Stops when no centroid moves further than `tolerance`,
//!   or after `max_iterations`, whichever comes first.
//! * **Randomness**: Seeding draws from a caller-supplied `rand::Rng`, so runs
//!   are reproducible with a seeded generator.
//! * **Restarts**: Several seedings can be run; the lowest inertia wins.
//!
//! ## Key concepts
//!
//! * **Assignment**: Each point goes to its nearest centroid; ties go to the
//!   lowest cluster index.
//! * **Update**: Each centroid becomes the arithmetic mean of its points.
//! * **Empty clusters**: Resolved by `EmptyClusterPolicy` before the update,
//!   so no centroid is ever the mean of zero points.
//!
//! ## Invariants
//!
//! * Exactly `k` clusters, in index order `0..k`.
//! * Every input point belongs to exactly one cluster.
//! * All output centroids are finite.
//!
//! ## Non-goals
//!
//! * This module does not choose `k`.
//! * This module does not cluster in more than two dimensions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use log::{debug, warn};
use num_traits::Float;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::inertia;
use crate::math::distance::{euclidean, nearest, squared_euclidean};
use crate::primitives::errors::AnalyticsError;
use crate::primitives::point::{Planar, Point};

// ============================================================================
// Configuration
// ============================================================================

/// How initial centroids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Initialization {
    /// Sample `k` input points uniformly, with replacement.
    #[default]
    Random,

    /// k-means++: each further seed is drawn with probability proportional
    /// to its squared distance from the nearest seed already chosen.
    KMeansPlusPlus,
}

/// What to do when an assignment step leaves a cluster without points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EmptyClusterPolicy {
    /// Move the point farthest from its own centroid (taken from a cluster
    /// with at least two members) into the empty cluster.
    #[default]
    ReseedFarthest,

    /// Keep the empty cluster's previous centroid unchanged.
    Freeze,
}

/// Parameters of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig<T> {
    /// Number of clusters.
    pub k: usize,

    /// Largest centroid displacement still counted as converged.
    pub tolerance: T,

    /// Iteration cap per restart.
    pub max_iterations: usize,

    /// Seeding strategy.
    pub initialization: Initialization,

    /// Empty-cluster recovery.
    pub empty_cluster_policy: EmptyClusterPolicy,

    /// Number of independent seedings; the run with the lowest inertia wins.
    ///
    /// A single `Random` seeding can merge two groups and split a third.
    /// Ten restarts make the recovered membership independent of the seed
    /// on well-separated data.
    pub restarts: usize,
}

impl<T: Float> Default for KMeansConfig<T> {
    fn default() -> Self {
        Self {
            k: 3,
            tolerance: T::from(1e-9).unwrap_or_else(T::epsilon),
            max_iterations: 300,
            initialization: Initialization::default(),
            empty_cluster_policy: EmptyClusterPolicy::default(),
            restarts: 10,
        }
    }
}

impl<T: Float> KMeansConfig<T> {
    /// Default configuration with `k` clusters.
    pub fn with_clusters(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Check every parameter except `k` against the point count.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.k == 0 {
            return Err(AnalyticsError::InvalidClusterCount(self.k));
        }
        Validator::validate_tolerance(self.tolerance)?;
        Validator::validate_iterations(self.max_iterations)?;
        Validator::validate_restarts(self.restarts)
    }
}

// ============================================================================
// Output
// ============================================================================

/// One cluster of the output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster<T, P> {
    /// Member records, in input order.
    pub points: Vec<P>,

    /// Input indices of the members.
    pub indices: Vec<usize>,

    /// Mean position of the members.
    pub centroid: Point<T>,
}

impl<T, P> Cluster<T, P> {
    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Result of clustering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusteringResult<T, P> {
    /// Clusters in index order.
    pub clusters: Vec<Cluster<T, P>>,

    /// Cluster index of each input point.
    pub labels: Vec<usize>,

    /// Sum of squared distances from points to their centroids.
    pub inertia: T,

    /// Iterations performed by the selected run.
    pub iterations: usize,

    /// Whether the selected run met the tolerance before the cap.
    pub converged: bool,

    /// Empty clusters recovered during the selected run.
    pub reseeded: usize,
}

impl<T: Float, P> ClusteringResult<T, P> {
    /// Centroids in cluster order.
    pub fn centroids(&self) -> Vec<Point<T>> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    /// Nearest final centroid for each of `points`.
    pub fn predict<Q: Planar<T>>(&self, points: &[Q]) -> Vec<usize> {
        let positions: Vec<Point<T>> = points.iter().map(|p| p.position()).collect();
        assign(&positions, &self.centroids())
    }
}

impl<T: Float + fmt::Display, P> fmt::Display for ClusteringResult<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.labels.len())?;
        writeln!(f, "  Clusters: {}", self.clusters.len())?;
        writeln!(
            f,
            "  Iterations: {} ({})",
            self.iterations,
            if self.converged {
                "converged"
            } else {
                "did not converge"
            }
        )?;
        writeln!(f, "  Inertia: {:.6}", self.inertia)?;
        writeln!(f)?;
        writeln!(f, "Clusters:")?;
        writeln!(
            f,
            "  {:>8} {:>8} {:>14} {:>14}",
            "Cluster", "Size", "Centroid_X", "Centroid_Y"
        )?;
        writeln!(f, "  {}", "-".repeat(47))?;
        for (i, c) in self.clusters.iter().enumerate() {
            writeln!(
                f,
                "  {:>8} {:>8} {:>14.4} {:>14.4}",
                i + 1,
                c.len(),
                c.centroid.x,
                c.centroid.y
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// State of a single seeded run.
struct Run<T> {
    centroids: Vec<Point<T>>,
    labels: Vec<usize>,
    inertia: T,
    iterations: usize,
    converged: bool,
    reseeded: usize,
}

/// Cluster `points` into `config.k` groups using `rng` for seeding.
pub fn cluster<T, P, R>(
    points: &[P],
    config: &KMeansConfig<T>,
    rng: &mut R,
) -> Result<ClusteringResult<T, P>, AnalyticsError>
where
    T: Float,
    P: Planar<T> + Clone,
    R: Rng,
{
    config.validate()?;
    Validator::validate_points(points, 1)?;
    Validator::validate_cluster_count(config.k, points.len())?;

    let positions: Vec<Point<T>> = points.iter().map(|p| p.position()).collect();

    let mut best: Option<Run<T>> = None;
    for restart in 0..config.restarts {
        let run = lloyd(&positions, config, rng);
        debug!(
            "k-means restart {}: {} iterations, converged = {}, inertia = {}",
            restart,
            run.iterations,
            run.converged,
            run.inertia.to_f64().unwrap_or(f64::NAN)
        );
        let better = match &best {
            Some(b) => run.inertia < b.inertia,
            None => true,
        };
        if better {
            best = Some(run);
        }
    }

    let run = best.ok_or(AnalyticsError::InvalidRestarts(config.restarts))?;
    if !run.converged {
        warn!(
            "k-means did not converge within {} iterations; returning last state",
            config.max_iterations
        );
    }

    Ok(assemble(points, run))
}

/// Group the input records by their final labels.
fn assemble<T: Float, P: Clone>(points: &[P], run: Run<T>) -> ClusteringResult<T, P> {
    let mut clusters: Vec<Cluster<T, P>> = run
        .centroids
        .iter()
        .map(|&centroid| Cluster {
            points: Vec::new(),
            indices: Vec::new(),
            centroid,
        })
        .collect();

    for (i, (&label, point)) in run.labels.iter().zip(points.iter()).enumerate() {
        clusters[label].points.push(point.clone());
        clusters[label].indices.push(i);
    }

    ClusteringResult {
        clusters,
        labels: run.labels,
        inertia: run.inertia,
        iterations: run.iterations,
        converged: run.converged,
        reseeded: run.reseeded,
    }
}

// ============================================================================
// Lloyd Iteration
// ============================================================================

/// One seeded run from initialization to convergence or the cap.
fn lloyd<T: Float, R: Rng>(positions: &[Point<T>], config: &KMeansConfig<T>, rng: &mut R) -> Run<T> {
    let k = config.k;
    let mut centroids = match config.initialization {
        Initialization::Random => seed_random(positions, k, rng),
        Initialization::KMeansPlusPlus => seed_plus_plus(positions, k, rng),
    };
    let mut labels = Vec::new();
    let mut iterations = 0;
    let mut converged = false;
    let mut reseeded = 0;

    while iterations < config.max_iterations {
        iterations += 1;

        let mut next_labels = assign(positions, &centroids);
        if config.empty_cluster_policy == EmptyClusterPolicy::ReseedFarthest {
            reseeded += reseed_empty(positions, &centroids, &mut next_labels, k);
        }
        let next_centroids = update(positions, &next_labels, &centroids);

        let shift = centroids
            .iter()
            .zip(next_centroids.iter())
            .map(|(&a, &b)| euclidean(a, b))
            .fold(T::zero(), T::max);

        labels = next_labels;
        centroids = next_centroids;

        if shift <= config.tolerance {
            converged = true;
            break;
        }
    }

    let inertia = inertia(positions, &labels, &centroids);
    Run {
        centroids,
        labels,
        inertia,
        iterations,
        converged,
        reseeded,
    }
}

/// Label of the nearest centroid for every point.
pub fn assign<T: Float>(positions: &[Point<T>], centroids: &[Point<T>]) -> Vec<usize> {
    positions
        .iter()
        .map(|&p| nearest(p, centroids).map_or(0, |(j, _)| j))
        .collect()
}

/// Mean position of each cluster; an empty cluster keeps its previous centroid.
pub fn update<T: Float>(
    positions: &[Point<T>],
    labels: &[usize],
    previous: &[Point<T>],
) -> Vec<Point<T>> {
    let k = previous.len();
    let mut sums = vec![Point::new(T::zero(), T::zero()); k];
    let mut counts = vec![0usize; k];

    for (&p, &j) in positions.iter().zip(labels.iter()) {
        sums[j].x = sums[j].x + p.x;
        sums[j].y = sums[j].y + p.y;
        counts[j] += 1;
    }

    sums.iter()
        .zip(counts.iter())
        .zip(previous.iter())
        .map(|((&s, &c), &prev)| match T::from(c) {
            Some(n) if c > 0 => Point::new(s.x / n, s.y / n),
            _ => prev,
        })
        .collect()
}

/// Give every empty cluster the farthest point of a cluster that can spare one.
///
/// Returns the number of clusters reseeded. With at least `k` points a donor
/// always exists.
pub fn reseed_empty<T: Float>(
    positions: &[Point<T>],
    centroids: &[Point<T>],
    labels: &mut [usize],
    k: usize,
) -> usize {
    let mut counts = vec![0usize; k];
    for &j in labels.iter() {
        counts[j] += 1;
    }

    let mut reseeded = 0;
    for empty in 0..k {
        if counts[empty] > 0 {
            continue;
        }

        let mut donor: Option<(usize, T)> = None;
        for (i, (&p, &j)) in positions.iter().zip(labels.iter()).enumerate() {
            if counts[j] < 2 {
                continue;
            }
            let d = squared_euclidean(p, centroids[j]);
            match donor {
                Some((_, bd)) if d <= bd => {}
                _ => donor = Some((i, d)),
            }
        }

        let Some((i, _)) = donor else {
            break;
        };
        warn!(
            "k-means cluster {} is empty; reseeding it from point {}",
            empty, i
        );
        counts[labels[i]] -= 1;
        labels[i] = empty;
        counts[empty] = 1;
        reseeded += 1;
    }

    reseeded
}

// ============================================================================
// Seeding
// ============================================================================

/// `k` positions drawn uniformly with replacement.
fn seed_random<T: Float, R: Rng>(positions: &[Point<T>], k: usize, rng: &mut R) -> Vec<Point<T>> {
    (0..k)
        .map(|_| positions[rng.random_range(0..positions.len())])
        .collect()
}

/// k-means++ seeding.
fn seed_plus_plus<T: Float, R: Rng>(
    positions: &[Point<T>],
    k: usize,
    rng: &mut R,
) -> Vec<Point<T>> {
    let n = positions.len();
    let mut seeds = Vec::with_capacity(k);
    seeds.push(positions[rng.random_range(0..n)]);

    let mut weights: Vec<f64> = positions
        .iter()
        .map(|&p| squared_euclidean(p, seeds[0]).to_f64().unwrap_or(0.0))
        .collect();

    while seeds.len() < k {
        let total: f64 = weights.iter().sum();
        let next = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0;
            let mut chosen = None;
            for (i, &w) in weights.iter().enumerate() {
                if w <= 0.0 {
                    continue;
                }
                acc += w;
                chosen = Some(i);
                if acc > target {
                    break;
                }
            }
            chosen.unwrap_or_else(|| rng.random_range(0..n))
        } else {
            // Every point coincides with a seed.
            rng.random_range(0..n)
        };

        let seed = positions[next];
        seeds.push(seed);
        for (w, &p) in weights.iter_mut().zip(positions.iter()) {
            let d = squared_euclidean(p, seed).to_f64().unwrap_or(0.0);
            if d < *w {
                *w = d;
            }
        }
    }

    seeds
}
