use hexfield_core::HexCoord;

/// Precondition and cancellation errors from a path query.
///
/// "No path exists" is not an error: it is the `Ok(None)` result of a
/// completed search. These variants cover caller bugs (endpoints off the
/// board) and cooperative interruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("start hex {0} is not on the board")]
    StartOffBoard(HexCoord),
    #[error("goal hex {0} is not on the board")]
    GoalOffBoard(HexCoord),
    #[error("search interrupted by stop flag")]
    Interrupted,
}
