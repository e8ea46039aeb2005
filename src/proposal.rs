use crate::bridges::non_bridges;
use crate::error::SamplerError;
use crate::graph::Graph;
use crate::points::PointSet;
use rand::Rng;

/// Which kind of mutation a step attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Add,
    Cut,
}

/// The single-edge mutation applied to the proposal graph. A cut keeps the
/// removed weight so the move can be undone (or replayed onto the current
/// graph) without recomputing the distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Move {
    Add { i: usize, j: usize },
    Cut { i: usize, j: usize, weight: f64 },
}

/// Probability of choosing an add-move at `m` edges:
/// `(Nmax − m) / (Nmax − Nmin)`. Linear in `m`, equal to 1 at the spanning
/// tree bound and 0 at the complete graph, which is what keeps the chain
/// inside `[Nmin, Nmax]` without any explicit clamping.
pub fn add_probability(m: usize, points: &PointSet) -> f64 {
    (points.max_edges() - m) as f64 / (points.max_edges() - points.min_edges()) as f64
}

/// Draw the move kind for a graph with `m` edges.
pub fn add_or_cut(m: usize, points: &PointSet, rng: &mut impl Rng) -> MoveKind {
    if rng.gen::<f64>() < add_probability(m, points) {
        MoveKind::Add
    } else {
        MoveKind::Cut
    }
}

/// Bound on pair resampling for the add-move. With at least one free pair
/// the miss probability per draw is at most `1 - 2/n²`, so exhausting this
/// many draws means the edge-count invariant is broken, not bad luck.
const MAX_ADD_DRAWS: usize = 100_000;

/// Mutate `proposal` by exactly one edge and report the mutation.
///
/// `proposal` must be identical to the current graph when this is called.
/// Failure means no legal move of the drawn kind exists, which the
/// `add_probability` bounds rule out for any sane state; it is surfaced
/// immediately instead of retrying.
pub fn propose(
    proposal: &mut Graph,
    points: &PointSet,
    rng: &mut impl Rng,
) -> Result<Move, SamplerError> {
    match add_or_cut(proposal.m(), points, rng) {
        MoveKind::Add => propose_add(proposal, points, rng),
        MoveKind::Cut => propose_cut(proposal, rng),
    }
}

/// Uniform non-edge insertion: resample vertex pairs until a free one
/// turns up, with a hard cap instead of an unbounded loop.
fn propose_add(
    proposal: &mut Graph,
    points: &PointSet,
    rng: &mut impl Rng,
) -> Result<Move, SamplerError> {
    let exhausted = SamplerError::ProposalExhausted {
        kind: "add",
        edges: proposal.m(),
    };
    if proposal.m() >= points.max_edges() {
        return Err(exhausted);
    }
    for _ in 0..MAX_ADD_DRAWS {
        let i = rng.gen_range(0..points.n());
        let j = rng.gen_range(0..points.n());
        if i != j && !proposal.has_edge(i, j) {
            proposal.add_edge(i, j, points.distance(i, j));
            return Ok(Move::Add {
                i: i.min(j),
                j: i.max(j),
            });
        }
    }
    Err(exhausted)
}

/// Uniform choice from the precomputed non-bridge edges. Sampling from the
/// legal set directly (rather than drawing pairs and retrying) is what
/// guarantees termination and a well-defined cut distribution.
fn propose_cut(proposal: &mut Graph, rng: &mut impl Rng) -> Result<Move, SamplerError> {
    let candidates = non_bridges(proposal);
    if candidates.is_empty() {
        return Err(SamplerError::ProposalExhausted {
            kind: "cut",
            edges: proposal.m(),
        });
    }
    let (i, j) = candidates[rng.gen_range(0..candidates.len())];
    let weight = proposal.weight(i, j).expect("candidate edge is present");
    proposal.remove_edge(i, j);
    Ok(Move::Cut { i, j, weight })
}
