use serde::Deserialize;

use crate::{cell::CellType, error::SnapshotError};

// a snapshot exactly as it appears on the wire, before any validation
#[derive(Deserialize)]
struct WireSnapshot {
    cols: usize,
    rows: usize,
    field: Vec<Vec<i64>>,
    #[serde(default)]
    preview: Option<Vec<Vec<i64>>>,
}

#[derive(Deserialize)]
struct WireMessage {
    player: WireSnapshot,
    #[serde(default)]
    opponent: Option<serde_json::Value>,
}

/// One complete description of a playfield at a point in time.
///
/// Row 0 is the topmost visible row. A snapshot is never patched; each one replaces the last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    columns: usize,
    rows: usize,
    field: Vec<Vec<CellType>>,
    preview: Option<Vec<Vec<CellType>>>,
}

impl Snapshot {
    /// Builds a snapshot, rejecting a field whose shape disagrees with `rows` and `columns`.
    pub fn new(
        columns: usize,
        rows: usize,
        field: Vec<Vec<CellType>>,
        preview: Option<Vec<Vec<CellType>>>,
    ) -> Result<Self, SnapshotError> {
        if field.len() != rows {
            return Err(SnapshotError::FieldRows { declared: rows, actual: field.len() });
        }
        if let Some((row, line)) = field.iter().enumerate().find(|(_, line)| line.len() != columns) {
            return Err(SnapshotError::FieldColumns { row, declared: columns, actual: line.len() });
        }

        Ok(Snapshot { columns, rows, field, preview })
    }

    /// An all-empty field, the starting point for snapshots assembled in code rather than decoded
    /// from the stream (see [`with_cell`](Self::with_cell) and [`with_preview`](Self::with_preview)).
    pub fn empty(columns: usize, rows: usize) -> Self {
        Snapshot {
            columns,
            rows,
            field: vec![vec![CellType::Empty; columns]; rows],
            preview: None,
        }
    }

    /// Decodes a bare snapshot object (`{cols, rows, field, preview?}`).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str::<WireSnapshot>(json)?.try_into()
    }

    // out of range positions are ignored
    pub fn with_cell(mut self, row: usize, col: usize, cell: CellType) -> Self {
        if let Some(square) = self.field.get_mut(row).and_then(|line| line.get_mut(col)) {
            *square = cell;
        }
        self
    }

    pub fn with_preview(mut self, preview: Vec<Vec<CellType>>) -> Self {
        self.preview = Some(preview);
        self
    }

    pub fn columns(&self) -> usize { self.columns }

    pub fn rows(&self) -> usize { self.rows }

    pub fn lines(&self) -> &[Vec<CellType>] { &self.field }

    pub fn cell(&self, row: usize, col: usize) -> Option<CellType> {
        self.field.get(row).and_then(|line| line.get(col)).copied()
    }

    pub fn preview(&self) -> Option<&[Vec<CellType>]> { self.preview.as_deref() }

    pub fn is_degenerate(&self) -> bool { self.rows == 0 || self.columns == 0 }
}

impl TryFrom<WireSnapshot> for Snapshot {
    type Error = SnapshotError;

    fn try_from(wire: WireSnapshot) -> Result<Self, Self::Error> {
        let decode_grid = |grid: Vec<Vec<i64>>| -> Vec<Vec<CellType>> {
            grid.into_iter()
                .map(|line| line.into_iter().map(CellType::from_wire).collect())
                .collect()
        };

        let field = decode_grid(wire.field);
        let preview = wire.preview.map(decode_grid);
        Snapshot::new(wire.cols, wire.rows, field, preview)
    }
}

/// A decoded stream message: the local player's field and, in paired games, the opponent's.
#[derive(Debug)]
pub struct ServerMessage {
    pub player: Snapshot,
    // kept as a result so a broken opponent section never hides the player's own field
    pub opponent: Option<Result<Snapshot, SnapshotError>>,
}

impl ServerMessage {
    /// Decodes the wrapped `{"player": {...}, "opponent"?: {...}}` message shape.
    pub fn decode(json: &str) -> Result<Self, SnapshotError> {
        let wire = serde_json::from_str::<WireMessage>(json)?;
        let player = wire.player.try_into()?;
        let opponent = wire.opponent.filter(|value| !value.is_null()).map(|value| {
            serde_json::from_value::<WireSnapshot>(value)
                .map_err(SnapshotError::from)
                .and_then(Snapshot::try_from)
        });

        Ok(ServerMessage { player, opponent })
    }
}
