use crate::bridges::bridges;
use crate::graph::Graph;
use crate::points::PointSet;
use crate::proposal::add_probability;

/// Probability mass `q(to | from)` of the one-step proposal kernel.
///
/// `from` and `to` must differ by exactly one edge. Called in both
/// directions by the sampler: forward as `q(proposal | current)` and
/// reverse as `q(current | proposal)`.
///
/// For an addition the kernel picks uniformly among the `Nmax − m`
/// non-edges; for a cut it picks uniformly among the non-bridge edges,
/// counted as `m − bridge_count(to)` with the bridges evaluated on the
/// graph that already lacks the removed edge. A zero denominator there
/// means the cut cannot be generated at all, so the mass is 0.
pub fn transition_prob(from: &Graph, to: &Graph, points: &PointSet) -> f64 {
    let m = from.m();
    debug_assert_eq!(
        (to.m() as i64 - m as i64).abs(),
        1,
        "transition_prob needs graphs one edge apart"
    );
    let p_add = add_probability(m, points);
    if to.m() > m {
        p_add / (points.max_edges() - m) as f64
    } else {
        let cuttable = m as i64 - bridges(to).len() as i64;
        if cuttable <= 0 {
            return 0.0;
        }
        (1.0 - p_add) / cuttable as f64
    }
}
