use super::board::PITS_PER_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    South,
    North,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// Absolute index of this side's first pit
    pub fn offset(self) -> usize {
        match self {
            Player::South => 0,
            Player::North => PITS_PER_SIDE,
        }
    }

    /// Whether the absolute pit index lies in this side's half
    pub fn owns_pit(self, pos: usize) -> bool {
        pos >= self.offset() && pos < self.offset() + PITS_PER_SIDE
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::South => "South",
            Player::North => "North",
        }
    }
}
