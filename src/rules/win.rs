//! Win condition checking
//!
//! A player wins with five or more of their stones in a contiguous line along
//! one of four axes. Overlines count.

use crate::board::{Player, Pos, Snapshot};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Line axes, in the order the scan tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Down and to the right
    Diagonal,
    /// Down and to the left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// `(row, col)` step
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// First five-in-a-row found by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    /// Scan origin: the row-major first stone of the run
    pub start: Pos,
    pub direction: Direction,
}

impl WinningLine {
    /// The five stones starting at `start`
    pub fn positions(&self) -> [Pos; WIN_LENGTH] {
        let (dr, dc) = self.direction.delta();
        std::array::from_fn(|step| {
            let step = step as isize;
            Pos::new(
                (self.start.row as isize + dr * step) as usize,
                (self.start.col as isize + dc * step) as usize,
            )
        })
    }
}

/// Length of the run starting at `origin`, counting forward only and capped
/// at [`WIN_LENGTH`]
fn forward_run(board: &Snapshot, origin: Pos, player: Player, direction: Direction) -> usize {
    let (dr, dc) = direction.delta();
    let mut count = 1;
    let mut pos = origin;
    while count < WIN_LENGTH {
        match pos.offset(dr, dc, board.size()) {
            Some(next)
                if board.stone_at_index(next.to_index(board.size())).player() == Some(player) =>
            {
                count += 1;
                pos = next;
            }
            _ => break,
        }
    }
    count
}

/// Scan the board for a five-in-a-row.
///
/// Occupied cells are visited in row-major order and each direction is
/// extended forward from the cell, so a run is found at its first stone. The
/// first hit is returned, which decides the winner when one board holds lines
/// for both players.
pub fn find_winning_line(board: &Snapshot) -> Option<WinningLine> {
    for (start, player) in board.stones() {
        for direction in Direction::ALL {
            if forward_run(board, start, player, direction) >= WIN_LENGTH {
                return Some(WinningLine {
                    player,
                    start,
                    direction,
                });
            }
        }
    }
    None
}

/// Check for a winner
pub fn find_winner(board: &Snapshot) -> Option<Player> {
    find_winning_line(board).map(|line| line.player)
}

/// Fast five-in-a-row check through a specific position.
///
/// Counts both ways along each axis, so it finds any line `pos` belongs to.
/// Only checks 4 directions from the given position.
pub fn has_five_at_pos(board: &Snapshot, pos: Pos, player: Player) -> bool {
    let size = board.size();
    let owns = |p: Pos| board.stone_at_index(p.to_index(size)).player() == Some(player);
    if !board.contains(pos) || !owns(pos) {
        return false;
    }

    Direction::ALL.iter().any(|direction| {
        let (dr, dc) = direction.delta();
        let mut count = 1;
        for (sr, sc) in [(dr, dc), (-dr, -dc)] {
            let mut cur = pos;
            while let Some(next) = cur.offset(sr, sc, size).filter(|&p| owns(p)) {
                count += 1;
                cur = next;
            }
        }
        count >= WIN_LENGTH
    })
}
