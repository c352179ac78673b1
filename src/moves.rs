use schema::{MoveData, MoveId};
use serde::{Deserialize, Serialize};

/// A move a creature knows: a copy of the static move data plus the uses
/// it has left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: MoveId,
    pub data: MoveData,
    pub pp: u8,
}

impl Move {
    /// Create a new move instance with max PP
    pub fn new(id: MoveId, data: MoveData) -> Self {
        let pp = data.max_pp;
        Move { id, data, pp }
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Get the max PP for this move
    pub fn max_pp(&self) -> u8 {
        self.data.max_pp
    }

    pub fn has_pp(&self) -> bool {
        self.pp > 0
    }

    /// Use the move (decrease PP). Returns false, leaving PP untouched, when
    /// none is left.
    pub fn use_move(&mut self) -> bool {
        if self.pp > 0 {
            self.pp -= 1;
            true
        } else {
            false
        }
    }
}
