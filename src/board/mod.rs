//! Board representation for Gomoku

pub mod bitboard;
pub mod snapshot;


// Re-exports
pub use bitboard::Bitboard;
pub use snapshot::Snapshot;

/// Board size used when nothing else is configured (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// The two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Side to move after `moves_played` moves
    #[inline]
    pub fn for_ply(moves_played: usize) -> Player {
        if moves_played % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Owner of the stone, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl From<Player> for Stone {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear index `row * size + col`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    #[inline]
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step by `(dr, dc)`, returning `None` when the result leaves the board
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        next.is_within(size).then_some(next)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, the order the win scan visits cells in
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
