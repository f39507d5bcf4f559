// src/graph/layout.rs
//! Seeded force-directed node placement.
//!
//! Fruchterman-Reingold: every pair repels with `k²/d`, every edge pulls
//! with `d²/k`, and a linearly cooling temperature caps each step.
//! Coordinates carry no meaning beyond the picture they draw.

use std::collections::HashMap;

use clap::ValueEnum;
use petgraph::graph::DiGraph;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::link_graph::LinkGraph;

const ITERATIONS: usize = 50;
const CONVERGENCE: f64 = 1e-4;
const MIN_DISTANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensions {
    #[value(name = "2")]
    Two,
    #[default]
    #[value(name = "3")]
    Three,
}

impl Dimensions {
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimensions {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(format!("dims must be 2 or 3, got {other}")),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(d: Dimensions) -> Self {
        match d {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// A node position. `z` is absent in 2-D layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Position {
    fn from_coords(c: [f64; 3], dims: Dimensions) -> Self {
        Self {
            x: c[0],
            y: c[1],
            z: (dims == Dimensions::Three).then_some(c[2]),
        }
    }
}

/// Position per node title. Empty for an empty graph.
#[must_use]
pub fn layout(graph: &LinkGraph, dims: Dimensions, seed: u64) -> HashMap<String, Position> {
    let pg = graph.as_petgraph();
    compute(pg, dims, seed)
        .into_iter()
        .zip(pg.node_weights())
        .map(|(pos, title)| (title.clone(), pos))
        .collect()
}

/// Positions indexed like the graph's nodes, rescaled into `[-1, 1]`.
#[must_use]
pub fn compute<N, E>(graph: &DiGraph<N, E>, dims: Dimensions, seed: u64) -> Vec<Position> {
    let n = graph.node_count();
    match n {
        0 => return Vec::new(),
        1 => return vec![Position::from_coords([0.0; 3], dims)],
        _ => {}
    }

    let d = dims.count();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pos: Vec<[f64; 3]> = (0..n)
        .map(|_| {
            let mut c = [0.0; 3];
            for v in c.iter_mut().take(d) {
                *v = rng.gen::<f64>();
            }
            c
        })
        .collect();

    let adjacency = undirected_adjacency(graph);
    simulate(&mut pos, &adjacency, d);
    rescale(&mut pos, d);

    pos.into_iter().map(|c| Position::from_coords(c, dims)).collect()
}

fn undirected_adjacency<N, E>(graph: &DiGraph<N, E>) -> Vec<Vec<bool>> {
    let n = graph.node_count();
    let mut adj = vec![vec![false; n]; n];
    for edge in graph.raw_edges() {
        let (a, b) = (edge.source().index(), edge.target().index());
        adj[a][b] = true;
        adj[b][a] = true;
    }
    adj
}

#[allow(clippy::cast_precision_loss, clippy::needless_range_loop)]
fn simulate(pos: &mut [[f64; 3]], adjacency: &[Vec<bool>], d: usize) {
    let n = pos.len();
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = initial_temperature(pos, d);
    let cooling = temperature / (ITERATIONS as f64 + 1.0);

    for _ in 0..ITERATIONS {
        let mut moved = 0.0;
        let mut displacement = vec![[0.0; 3]; n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = sub(pos[i], pos[j]);
                let dist = norm(delta, d).max(MIN_DISTANCE);
                let mut force = k * k / (dist * dist);
                if adjacency[i][j] {
                    force -= dist / k;
                }
                for a in 0..d {
                    displacement[i][a] += delta[a] * force;
                }
            }
        }

        for i in 0..n {
            let length = norm(displacement[i], d).max(MIN_DISTANCE);
            let step = temperature / length;
            for a in 0..d {
                let shift = displacement[i][a] * step;
                pos[i][a] += shift;
            }
            moved += norm(displacement[i], d) * step;
        }

        temperature -= cooling;
        if moved / (n as f64) < CONVERGENCE {
            break;
        }
    }
}

fn initial_temperature(pos: &[[f64; 3]], d: usize) -> f64 {
    let spread = (0..d)
        .map(|a| {
            let (lo, hi) = pos.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
                (lo.min(p[a]), hi.max(p[a]))
            });
            hi - lo
        })
        .fold(0.0, f64::max);
    spread * 0.1
}

/// Centers on the mean and scales so the largest coordinate is 1.
#[allow(clippy::cast_precision_loss)]
fn rescale(pos: &mut [[f64; 3]], d: usize) {
    let n = pos.len() as f64;
    for a in 0..d {
        let mean = pos.iter().map(|p| p[a]).sum::<f64>() / n;
        for p in pos.iter_mut() {
            p[a] -= mean;
        }
    }
    let lim = pos
        .iter()
        .flat_map(|p| p.iter().take(d))
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    if lim > 0.0 {
        for p in pos.iter_mut() {
            for v in p.iter_mut().take(d) {
                *v /= lim;
            }
        }
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(v: [f64; 3], d: usize) -> f64 {
    v.iter().take(d).map(|x| x * x).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkGraph {
        let mut g = LinkGraph::new("F");
        for t in ["A", "B", "C", "D"] {
            g.add_edge("F", t);
        }
        g.add_edge("B", "F");
        g
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let g = sample();
        assert_eq!(layout(&g, Dimensions::Three, 42), layout(&g, Dimensions::Three, 42));
        assert_eq!(layout(&g, Dimensions::Two, 7), layout(&g, Dimensions::Two, 7));
    }

    #[test]
    fn test_dimensions_shape() {
        let g = sample();
        assert!(layout(&g, Dimensions::Three, 1).values().all(|p| p.z.is_some()));
        assert!(layout(&g, Dimensions::Two, 1).values().all(|p| p.z.is_none()));
    }

    #[test]
    fn test_every_node_placed_within_bounds() {
        let g = sample();
        let pos = layout(&g, Dimensions::Three, 3);
        assert_eq!(pos.len(), g.node_count());
        for p in pos.values() {
            for v in [p.x, p.y, p.z.unwrap_or(0.0)] {
                assert!(v.is_finite() && v.abs() <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_empty_and_single() {
        let empty: DiGraph<(), ()> = DiGraph::new();
        assert!(compute(&empty, Dimensions::Three, 0).is_empty());
        let single = layout(&LinkGraph::new("F"), Dimensions::Two, 0);
        assert_eq!(single["F"], Position { x: 0.0, y: 0.0, z: None });
    }

    #[test]
    fn test_dims_from_integer() {
        assert_eq!(Dimensions::try_from(2), Ok(Dimensions::Two));
        assert!(Dimensions::try_from(4).is_err());
    }
}
