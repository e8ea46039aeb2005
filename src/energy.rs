use crate::graph::Graph;

/// Energy of a graph: `r · Σ edge weights + Σ dist(0, v)` over all
/// vertices, with shortest-path distances taken along edge weights.
/// Low total wiring length and short reach from vertex 0 both lower it.
pub fn theta(g: &Graph, r: f64) -> f64 {
    let reach: f64 = g.distances_from_root().iter().sum();
    r * g.total_weight() + reach
}

/// Target-density ratio `π(g2) / π(g1)` for the Boltzmann density
/// `π(g) ∝ exp(−theta(g)/T)`.
pub fn pi_ratio(g1: &Graph, g2: &Graph, r: f64, temperature: f64) -> f64 {
    (-(theta(g2, r) - theta(g1, r)) / temperature).exp()
}

/// Longest shortest-path distance from vertex 0. Reported as a run
/// statistic; plays no part in acceptance.
pub fn eccentricity(g: &Graph) -> f64 {
    g.distances_from_root().into_iter().fold(0.0, f64::max)
}
