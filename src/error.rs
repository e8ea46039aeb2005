use thiserror::Error;

/// Errors surfaced by session construction and the proposal step.
///
/// The zero reverse-proposal-probability case is deliberately absent: it is
/// handled inside the acceptance rule (the move is accepted outright), not
/// reported as an error.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Fewer than 2 vertices supplied; no usable graph exists.
    #[error("need at least 2 points to build a graph, got {found}")]
    InvalidInput { found: usize },

    /// A proposal could not be generated: an add-move with no free vertex
    /// pair left, or a cut-move with no non-bridge edge. Both are
    /// unreachable while the edge-count bounds hold, so hitting this means
    /// the chain state is corrupt and the run must stop.
    #[error("no legal {kind} move available at {edges} edges")]
    ProposalExhausted { kind: &'static str, edges: usize },
}
