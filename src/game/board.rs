use super::player::Player;

pub const PITS: usize = 12;
pub const PITS_PER_SIDE: usize = 6;
pub const SEEDS_PER_PIT: u32 = 4;
pub const TOTAL_SEEDS: u32 = 48;

/// The 12-pit Oware board with both capture scores.
///
/// Pits 0–5 belong to South, pits 6–11 to North. Between moves,
/// `sum(pits) + score_south + score_north == 48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pits: [u32; PITS],
    score_south: u32,
    score_north: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    EmptyPit,
    InvalidPit,
}

impl Board {
    /// Create the starting board: 4 seeds in every pit, both scores 0.
    pub fn new() -> Self {
        Board {
            pits: [SEEDS_PER_PIT; PITS],
            score_south: 0,
            score_north: 0,
        }
    }

    /// Build a board from explicit pit contents and scores.
    pub fn from_position(pits: [u32; PITS], score_south: u32, score_north: u32) -> Self {
        Board {
            pits,
            score_south,
            score_north,
        }
    }

    /// Seed count of an absolute pit.
    pub fn pit(&self, pos: usize) -> u32 {
        self.pits[pos]
    }

    /// Seed count of a side's pit, by relative index 0–5.
    pub fn pit_for(&self, side: Player, pit: usize) -> u32 {
        self.pits[side.offset() + pit]
    }

    pub fn pits(&self) -> &[u32; PITS] {
        &self.pits
    }

    pub fn score(&self, side: Player) -> u32 {
        match side {
            Player::South => self.score_south,
            Player::North => self.score_north,
        }
    }

    /// Total seeds remaining in a side's half.
    pub fn side_seeds(&self, side: Player) -> u32 {
        let start = side.offset();
        self.pits[start..start + PITS_PER_SIDE].iter().sum()
    }

    fn score_mut(&mut self, side: Player) -> &mut u32 {
        match side {
            Player::South => &mut self.score_south,
            Player::North => &mut self.score_north,
        }
    }

    fn clear_side(&mut self, side: Player) {
        let start = side.offset();
        for pit in &mut self.pits[start..start + PITS_PER_SIDE] {
            *pit = 0;
        }
    }

    /// Sow from an absolute pit: drop one seed per pit walking upward modulo
    /// 12, skipping the origin even past a full revolution. Returns the
    /// absolute index of the last pit sown.
    pub fn sow_from(&mut self, pos: usize) -> Result<usize, MoveError> {
        if pos >= PITS {
            return Err(MoveError::InvalidPit);
        }
        let mut seeds = self.pits[pos];
        if seeds == 0 {
            return Err(MoveError::EmptyPit);
        }
        self.pits[pos] = 0;
        let mut p = pos;
        while seeds > 0 {
            p = (p + 1) % PITS;
            if p == pos {
                continue;
            }
            self.pits[p] += 1;
            seeds -= 1;
        }
        Ok(p)
    }

    /// Sow one of `side`'s pits, by relative index 0–5.
    pub fn sow(&mut self, side: Player, pit: usize) -> Result<usize, MoveError> {
        if pit >= PITS_PER_SIDE {
            return Err(MoveError::InvalidPit);
        }
        self.sow_from(side.offset() + pit)
    }

    /// Capture the backward chain of 2- and 3-seed pits ending at `last`.
    ///
    /// The chain extends from `last` toward the first pit of its half and
    /// stops at the first pit not holding exactly 2 or 3 seeds. Returns the
    /// seeds removed; pits outside the chain are untouched. Does not touch
    /// the scores.
    pub fn capture_from(&mut self, last: usize) -> u32 {
        if last >= PITS || !matches!(self.pits[last], 2 | 3) {
            return 0;
        }
        let mut p = last;
        let mut total = 0;
        loop {
            total += self.pits[p];
            if p % PITS_PER_SIDE == 0 {
                break;
            }
            let prev = p - 1;
            if !matches!(self.pits[prev], 2 | 3) {
                break;
            }
            p = prev;
        }
        // Grand slam: voided when nothing is left in the half past `last`
        // and the chain reached the half's first pit.
        let mut beyond = 0;
        let mut i = last + 1;
        while i % PITS_PER_SIDE != 0 {
            beyond += self.pits[i];
            i += 1;
        }
        if beyond == 0 && p % PITS_PER_SIDE == 0 {
            return 0;
        }
        for pit in &mut self.pits[p..=last] {
            *pit = 0;
        }
        total
    }

    /// Capture for `side` after sowing ended at absolute pit `last`.
    ///
    /// Only fires when `last` lies in the opponent's half; the captured
    /// seeds are added to `side`'s score and returned.
    pub fn capture(&mut self, side: Player, last: usize) -> u32 {
        if side.owns_pit(last) {
            return 0;
        }
        let captured = self.capture_from(last);
        *self.score_mut(side) += captured;
        captured
    }

    /// Starvation settlement: if one half is empty, sweep the other half
    /// into its owner's score and return the swept amount. Returns `None`
    /// while both halves hold seeds, and also once the board is bare.
    pub fn settle(&mut self) -> Option<u32> {
        for side in [Player::South, Player::North] {
            if self.side_seeds(side) == 0 {
                let other = side.other();
                let swept = self.side_seeds(other);
                if swept > 0 {
                    self.clear_side(other);
                    *self.score_mut(other) += swept;
                    return Some(swept);
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
