use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use strum_macros::EnumIter;

// fill colors shared by every renderer
pub const EMPTY_FILL: &str = "#f2f2f2";
pub const WALL_FILL: &str = "#333333";

/// The state of a single playfield cell.
///
/// The discriminants are the values the server sends on the wire and must stay in step with it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive, EnumIter)]
pub enum CellType {
    #[default]
    Empty = 0,
    Blasted = 1,
    PieceI = 2,
    PieceJ = 3,
    PieceL = 4,
    PieceO = 5,
    PieceS = 6,
    PieceT = 7,
    PieceZ = 8,
}

impl CellType {
    // values outside the table render as empty cells
    pub fn from_wire(value: i64) -> CellType { CellType::from_i64(value).unwrap_or(CellType::Empty) }

    pub fn is_empty(self) -> bool { self == CellType::Empty }

    /// Solid fill color, or `None` for cells drawn with the blast glyph instead.
    pub fn fill(self) -> Option<&'static str> {
        match self {
            CellType::Empty => Some(EMPTY_FILL),
            CellType::PieceI => Some("#00FFFF"),
            CellType::PieceJ => Some("#0000FF"),
            CellType::PieceL => Some("#FFA500"),
            CellType::PieceO => Some("#FFFF00"),
            CellType::PieceS => Some("#00FF00"),
            CellType::PieceT => Some("#800080"),
            CellType::PieceZ => Some("#FF0000"),
            CellType::Blasted => None,
        }
    }
}
