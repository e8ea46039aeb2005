use crate::energy::{eccentricity, pi_ratio};
use crate::error::SamplerError;
use crate::graph::{EdgeSet, Graph};
use crate::points::PointSet;
use crate::proposal::{propose, Move};
use crate::stats::{RunStatistics, RunSums, VisitHistogram};
use crate::transition::transition_prob;
use rand::Rng;

/// Run-constant couplings of the target density
/// `π(g) ∝ exp(−theta(g)/T)` with `theta = r·Σw + Σ dist(0, v)`.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// Weighting of total edge length against reach from vertex 0.
    pub r: f64,
    /// Temperature; higher flattens the distribution.
    pub temperature: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            r: 1.0,
            temperature: 1.0,
        }
    }
}

/// Returned by [`Session::step`]; lets a driver track acceptance in O(1).
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub accepted: bool,
    pub mv: Move,
}

/// Accepted/rejected tallies per move kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveCount {
    pub accepted_adds: u64,
    pub accepted_cuts: u64,
    pub rejected_adds: u64,
    pub rejected_cuts: u64,
}

impl MoveCount {
    pub fn accepted(&self) -> u64 {
        self.accepted_adds + self.accepted_cuts
    }

    pub fn total(&self) -> u64 {
        self.accepted() + self.rejected_adds + self.rejected_cuts
    }
}

/// One Metropolis–Hastings sampling session. Owns every piece of mutable
/// run state: the accepted graph, the proposal graph, the visitation
/// histogram, the running sums, and the move tallies. Independent sessions
/// never share anything.
#[derive(Debug, Clone)]
pub struct Session {
    points: PointSet,
    params: Params,
    current: Graph,
    proposal: Graph,
    histogram: VisitHistogram,
    sums: RunSums,
    outcomes: MoveCount,
}

impl Session {
    /// Start a session on the given points: initial state is the
    /// index-order path graph, recorded as the first visited state.
    pub fn new(points: PointSet, params: Params) -> Self {
        let n = points.n();
        let mut session = Self {
            points,
            params,
            current: Graph::empty(n),
            proposal: Graph::empty(n),
            histogram: VisitHistogram::default(),
            sums: RunSums::default(),
            outcomes: MoveCount::default(),
        };
        session.reset();
        session
    }

    /// Rebuild the initial path graph and wipe the histogram, sums and
    /// tallies. Calling this repeatedly always lands in the same state:
    /// one histogram entry, sums seeded with the initial graph.
    pub fn reset(&mut self) {
        self.current = Graph::path(&self.points);
        self.proposal = self.current.clone();
        self.histogram = VisitHistogram::default();
        self.sums = RunSums::default();
        self.outcomes = MoveCount::default();
        self.record();
    }

    /// Advance the chain by one accepted-or-rejected move.
    ///
    /// Propose: mutate `proposal` by one edge. Decide: Metropolis–Hastings
    /// with the asymmetric-kernel correction,
    /// `a = min(1, pi_ratio · q(proposal|current) / q(current|proposal))`;
    /// a vanishing reverse mass means the move cannot be undone by the
    /// kernel and is accepted outright. Commit: replay the move onto
    /// `current`, or undo it on `proposal`. The two graphs are identical
    /// again when this returns.
    pub fn step(&mut self, rng: &mut impl Rng) -> Result<StepInfo, SamplerError> {
        let mv = propose(&mut self.proposal, &self.points, rng)?;

        let q_forward = transition_prob(&self.current, &self.proposal, &self.points);
        let q_reverse = transition_prob(&self.proposal, &self.current, &self.points);
        let accept_prob = if q_reverse == 0.0 {
            1.0
        } else {
            let ratio = pi_ratio(
                &self.current,
                &self.proposal,
                self.params.r,
                self.params.temperature,
            );
            (ratio * q_forward / q_reverse).min(1.0)
        };

        let accepted = rng.gen::<f64>() < accept_prob;
        if accepted {
            match mv {
                Move::Add { i, j } => {
                    let w = self.proposal.weight(i, j).expect("accepted edge is present");
                    self.current.add_edge(i, j, w);
                }
                Move::Cut { i, j, .. } => {
                    let removed = self.current.remove_edge(i, j);
                    debug_assert!(removed, "accepted cut must apply to the current graph");
                }
            }
        } else {
            match mv {
                Move::Add { i, j } => {
                    self.proposal.remove_edge(i, j);
                }
                Move::Cut { i, j, weight } => {
                    self.proposal.add_edge(i, j, weight);
                }
            }
        }

        match (accepted, mv) {
            (true, Move::Add { .. }) => self.outcomes.accepted_adds += 1,
            (true, Move::Cut { .. }) => self.outcomes.accepted_cuts += 1,
            (false, Move::Add { .. }) => self.outcomes.rejected_adds += 1,
            (false, Move::Cut { .. }) => self.outcomes.rejected_cuts += 1,
        }

        self.record();
        Ok(StepInfo { accepted, mv })
    }

    /// Run `steps` sequential chain steps and return the time-averaged
    /// expectations over every recorded state (the seed state included).
    pub fn run(
        &mut self,
        steps: usize,
        rng: &mut impl Rng,
    ) -> Result<RunStatistics, SamplerError> {
        for _ in 0..steps {
            self.step(rng)?;
        }
        Ok(self.statistics())
    }

    fn record(&mut self) {
        self.histogram.record(self.current.edge_set());
        self.sums.push(
            self.current.degree(0),
            self.current.m(),
            eccentricity(&self.current),
        );
    }

    /// Expectations accumulated so far.
    pub fn statistics(&self) -> RunStatistics {
        self.sums.statistics()
    }

    /// The configurations covering the top 1% of recorded visits.
    pub fn top_percent(&self) -> Vec<EdgeSet> {
        self.histogram.top_fraction(0.01)
    }

    pub fn current(&self) -> &Graph {
        &self.current
    }

    pub fn proposal(&self) -> &Graph {
        &self.proposal
    }

    pub fn histogram(&self) -> &VisitHistogram {
        &self.histogram
    }

    pub fn outcomes(&self) -> MoveCount {
        self.outcomes
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn params(&self) -> Params {
        self.params
    }
}
