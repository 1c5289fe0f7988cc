use hexfield_core::HexCoord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FovError {
    #[error("observer hex {0} is not on the board")]
    OriginOffBoard(HexCoord),
}
