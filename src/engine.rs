//! Core rule engine for the Jump In' puzzle.
//!
//! This module defines the game's fundamental components:
//! - `TileColour` and `Tile`: a grid cell with a fixed colour and an optional occupant.
//! - `Board`: the 5x5 grid, with occupancy queries, piece placement and removal,
//!   move legality for every piece family, legal-move enumeration and win detection.
//! - `BoardListener`: a callback notified after every successful mutation.
//!
//! Coordinates are `(x, y)` with `x` the column and `y` the row, both starting at
//! the top-left corner. The board string is row-major: token `i` describes the
//! tile at `(i % BOARD_SIZE, i / BOARD_SIZE)`.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::ParseBoardError;
use crate::moves::Move;
use crate::piece::{Fox, Piece, RabbitColour};

/// Width and height of the board. The board is always square.
pub const BOARD_SIZE: usize = 5;

/// Name given to boards that were not created under a specific name.
pub const DEFAULT_NAME: &str = "default";

/// Token used in the board string for a tile without an occupant.
pub const EMPTY_TOKEN: &str = "X";

/// Scan order for move enumeration: up, down, left, right.
const SCAN_ORDER: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

type Cell = (usize, usize);

/// Colour of a tile. Rabbits win by standing on brown holes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileColour {
    Brown,
    Green,
}

impl TileColour {
    /// The fixed colour of the tile at `(x, y)`: the four corners and the centre are
    /// brown holes, every other tile is green.
    fn at(x: usize, y: usize) -> Self {
        let last = BOARD_SIZE - 1;
        let centre = BOARD_SIZE / 2;
        let is_corner = (x == 0 || x == last) && (y == 0 || y == last);
        if is_corner || (x == centre && y == centre) {
            TileColour::Brown
        } else {
            TileColour::Green
        }
    }
}

/// A single cell of the board.
///
/// The colour never changes after construction. The occupant only changes
/// through the board's placement and removal operations, so `is_occupied`
/// always agrees with `occupant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    colour: TileColour,
    occupant: Option<Piece>,
}

impl Tile {
    fn new(colour: TileColour) -> Self {
        Tile {
            colour,
            occupant: None,
        }
    }

    pub fn colour(&self) -> TileColour {
        self.colour
    }

    pub fn occupant(&self) -> Option<Piece> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Places `piece` on an empty tile. Returns `false` if the tile is occupied.
    fn place(&mut self, piece: Piece) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(piece);
        true
    }

    fn take(&mut self) -> Option<Piece> {
        self.occupant.take()
    }

    fn token(&self) -> String {
        match self.occupant {
            Some(piece) => piece.code(),
            None => EMPTY_TOKEN.to_string(),
        }
    }
}

/// Callback invoked after every successful `move_piece`, `set_piece`,
/// `remove_piece` or `restore` on a board it is registered with.
///
/// The callback receives the board immutably and therefore cannot mutate the
/// board that is notifying it.
pub trait BoardListener: Send + Sync {
    fn on_board_changed(&self, board: &Board);
}

/// The 5x5 game board.
///
/// Equality and hashing only look at the tile grid: the name and the registered
/// listeners are not part of a configuration.
///
/// # Examples
/// ```
/// use jumpin_solver::engine::Board;
/// use jumpin_solver::moves::Move;
///
/// let mut board = Board::create_board(
///     "intro",
///     "X X X X X MU X X X MU RBB X X X RBG X X X X X X X X X X",
/// )
/// .unwrap();
/// assert!(!board.is_in_winning_state());
/// // The brown rabbit jumps over the mushroom into the top-left hole.
/// assert!(board.move_piece(&Move::new(0, 2, 0, 0)));
/// assert!(board.move_piece(&Move::new(4, 2, 4, 0)));
/// assert!(board.is_in_winning_state());
/// ```
#[derive(Clone)]
pub struct Board {
    name: String,
    grid: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    listeners: Vec<Arc<dyn BoardListener>>,
}

fn cell(x: i32, y: i32) -> Option<Cell> {
    let size = BOARD_SIZE as i32;
    if (0..size).contains(&x) && (0..size).contains(&y) {
        Some((x as usize, y as usize))
    } else {
        None
    }
}

fn same_listener(a: &Arc<dyn BoardListener>, b: &Arc<dyn BoardListener>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl Board {
    /// Creates a board with the default layout: the "starter" level, in which each
    /// of two rabbits sits below a mushroom and can jump into a top corner hole.
    pub fn new() -> Self {
        let mut board = Board::empty(DEFAULT_NAME);
        board.put((0, 1), Piece::Mushroom);
        board.put((4, 1), Piece::Mushroom);
        board.put((0, 2), Piece::Rabbit(RabbitColour::Brown));
        board.put((4, 2), Piece::Rabbit(RabbitColour::Gray));
        board
    }

    /// Creates a board named `name` with no pieces on it.
    pub fn empty(name: &str) -> Self {
        let mut grid = [[Tile::new(TileColour::Green); BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in grid.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                *tile = Tile::new(TileColour::at(x, y));
            }
        }
        Board {
            name: name.to_string(),
            grid,
            listeners: Vec::new(),
        }
    }

    /// Parses a board from its string representation.
    ///
    /// # Arguments
    /// * `name`: The name the new board is known by.
    /// * `representation`: Exactly `BOARD_SIZE * BOARD_SIZE` whitespace-separated
    ///   tokens in row-major order. Each token is `X` (empty), `MU` (mushroom),
    ///   `RB` followed by `B`, `W` or `G` (rabbit), or `F` followed by `H`/`T`,
    ///   `L`/`R`/`U`/`D` and `0`/`1` (fox half).
    ///
    /// # Returns
    /// * `Ok(Board)` if every token was understood.
    /// * `Err(ParseBoardError)` on a wrong token count or an unknown token.
    pub fn parse(name: &str, representation: &str) -> Result<Board, ParseBoardError> {
        let tokens: Vec<&str> = representation.split_whitespace().collect();
        let expected = BOARD_SIZE * BOARD_SIZE;
        if tokens.len() != expected {
            return Err(ParseBoardError::WrongTokenCount {
                expected,
                found: tokens.len(),
            });
        }

        let mut board = Board::empty(name);
        for (index, token) in tokens.iter().enumerate() {
            if *token == EMPTY_TOKEN {
                continue;
            }
            let piece = Piece::from_code(token).ok_or_else(|| ParseBoardError::UnknownToken {
                index,
                token: token.to_string(),
            })?;
            board.put((index % BOARD_SIZE, index / BOARD_SIZE), piece);
        }
        Ok(board)
    }

    /// Same as `parse`, but reports failure as `None`.
    pub fn create_board(name: &str, representation: &str) -> Option<Board> {
        match Board::parse(name, representation) {
            Ok(board) => Some(board),
            Err(e) => {
                debug!(board = name, error = %e, "rejected board representation");
                None
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Returns a copy of this board that shares nothing with it, listeners included.
    pub fn snapshot(&self) -> Board {
        Board {
            name: self.name.clone(),
            grid: self.grid,
            listeners: Vec::new(),
        }
    }

    /// Replaces every occupant of this board with those of `other` and notifies
    /// the listeners. The name and listeners of `self` are kept.
    pub fn restore(&mut self, other: &Board) {
        self.grid = other.grid;
        self.notify();
    }

    /// Returns the tile at `(x, y)`, or `None` when the coordinates are off the board.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        cell(x, y).map(|(cx, cy)| &self.grid[cy][cx])
    }

    pub fn tile_colour(&self, x: i32, y: i32) -> Option<TileColour> {
        self.tile(x, y).map(Tile::colour)
    }

    /// Whether a piece stands on `(x, y)`. Off-board coordinates are never occupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(Tile::is_occupied)
    }

    pub fn piece(&self, x: i32, y: i32) -> Option<Piece> {
        self.tile(x, y).and_then(Tile::occupant)
    }

    /// Places `piece` on `(x, y)`.
    ///
    /// Only a single tile is touched, so a caller placing a fox is responsible for
    /// placing both halves.
    ///
    /// # Returns
    /// `false` if the coordinates are off the board or the tile is occupied.
    pub fn set_piece(&mut self, piece: Piece, x: i32, y: i32) -> bool {
        let Some((cx, cy)) = cell(x, y) else {
            return false;
        };
        if !self.grid[cy][cx].place(piece) {
            return false;
        }
        self.notify();
        true
    }

    /// Removes and returns the piece on `(x, y)`, if any.
    pub fn remove_piece(&mut self, x: i32, y: i32) -> Option<Piece> {
        let (cx, cy) = cell(x, y)?;
        let removed = self.grid[cy][cx].take();
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    /// Iterates over all pieces in row-major order as `(x, y, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, tile)| tile.occupant.map(|piece| (x, y, piece)))
        })
    }

    pub fn rabbit_count(&self) -> usize {
        self.pieces()
            .filter(|(_, _, piece)| matches!(piece, Piece::Rabbit(_)))
            .count()
    }

    /// Checks whether the puzzle is solved.
    ///
    /// A board is winning when it holds at least one rabbit and every rabbit
    /// stands on a brown tile. A board without rabbits is never winning.
    pub fn is_in_winning_state(&self) -> bool {
        let mut rabbits = 0;
        for (x, y, piece) in self.pieces() {
            if let Piece::Rabbit(_) = piece {
                if TileColour::at(x, y) != TileColour::Brown {
                    return false;
                }
                rabbits += 1;
            }
        }
        rabbits > 0
    }

    /// Attempts to perform `mv`.
    ///
    /// The move is rejected without touching the board if either endpoint is off
    /// the board, the start tile is empty, the end tile is occupied, or the piece
    /// on the start tile does not allow it:
    /// - a rabbit must jump in a straight line over at least one tile, and every
    ///   tile it jumps over must be occupied;
    /// - a fox slides along its own axis only, both halves move together, and
    ///   every tile its leading half sweeps must be empty;
    /// - a mushroom never moves.
    ///
    /// On success the listeners are notified.
    ///
    /// # Returns
    /// `true` if the move was performed.
    pub fn move_piece(&mut self, mv: &Move) -> bool {
        match self.check_move(mv) {
            Some(relocation) => {
                self.apply(&relocation);
                self.notify();
                true
            }
            None => {
                trace!(board = %self.name, %mv, "rejected move");
                false
            }
        }
    }

    /// Whether `move_piece` would accept `mv`, without performing it.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_some()
    }

    /// Enumerates every move the pieces on this board can currently make.
    ///
    /// Tiles are visited row-major. A rabbit contributes at most one jump per
    /// direction (up, down, left, right). A fox half contributes every legal slide
    /// along its axis, nearest destination first. Both halves of a fox are listed,
    /// so two moves may lead to the same configuration.
    pub fn possible_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (x, y, piece) in self.pieces() {
            let (x, y) = (x as i32, y as i32);
            match piece {
                Piece::Mushroom => {}
                Piece::Rabbit(_) => {
                    for (dx, dy) in SCAN_ORDER {
                        // Walk over the run of occupied tiles; the first empty tile is
                        // the only possible landing spot in this direction.
                        let mut k = 1;
                        while self.is_occupied(x + dx * k, y + dy * k) {
                            k += 1;
                        }
                        let mv = Move::new(x, y, x + dx * k, y + dy * k);
                        if k >= 2 && self.is_legal(&mv) {
                            moves.push(mv);
                        }
                    }
                }
                Piece::Fox(fox) => {
                    let (ax, ay) = fox.orientation.delta();
                    for (dx, dy) in SCAN_ORDER {
                        if (dx != 0) != (ax != 0) || (dy != 0) != (ay != 0) {
                            continue;
                        }
                        for k in 1..BOARD_SIZE as i32 {
                            let mv = Move::new(x, y, x + dx * k, y + dy * k);
                            if self.is_legal(&mv) {
                                moves.push(mv);
                            }
                        }
                    }
                }
            }
        }
        moves
    }

    /// Renders the board as a plain text grid with coordinates, for terminal use.
    /// Empty brown holes are drawn as `( )`, empty green tiles as `.`. The tile at
    /// `highlight`, if any, is wrapped in brackets.
    pub fn to_grid_string(&self, highlight: Option<(usize, usize)>) -> String {
        let mut output = String::from("  ");
        for x in 0..BOARD_SIZE {
            output.push_str(&format!("{:^7}", x));
        }
        for (y, row) in self.grid.iter().enumerate() {
            output.push('\n');
            output.push_str(&format!("{:<2}", y));
            for (x, tile) in row.iter().enumerate() {
                let text = match (tile.occupant, tile.colour) {
                    (Some(piece), _) => piece.code(),
                    (None, TileColour::Brown) => "( )".to_string(),
                    (None, TileColour::Green) => ".".to_string(),
                };
                let text = if highlight == Some((x, y)) {
                    format!("[{}]", text)
                } else {
                    text
                };
                output.push_str(&format!("{:^7}", text));
            }
        }
        output
    }

    pub fn add_listener(&mut self, listener: Arc<dyn BoardListener>) {
        if !self.listeners.iter().any(|l| same_listener(l, &listener)) {
            self.listeners.push(listener);
        }
    }

    /// Unregisters `listener`. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, listener: &Arc<dyn BoardListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        self.listeners.len() != before
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener.on_board_changed(self);
        }
    }

    /// Unchecked placement used while building boards.
    fn put(&mut self, (x, y): Cell, piece: Piece) {
        self.grid[y][x].occupant = Some(piece);
    }

    /// Validates `mv` and returns the `(from, to)` pairs it relocates.
    fn check_move(&self, mv: &Move) -> Option<Vec<(Cell, Cell)>> {
        let from = cell(mv.x_start, mv.y_start)?;
        let to = cell(mv.x_end, mv.y_end)?;
        let piece = self.grid[from.1][from.0].occupant?;
        if self.grid[to.1][to.0].is_occupied() {
            return None;
        }
        match piece {
            Piece::Mushroom => None,
            Piece::Rabbit(_) => self.rabbit_can_jump(mv).then(|| vec![(from, to)]),
            Piece::Fox(fox) => self.fox_slide(fox, mv),
        }
    }

    fn rabbit_can_jump(&self, mv: &Move) -> bool {
        let Some((dx, dy)) = mv.step() else {
            return false;
        };
        let distance = mv.distance();
        distance >= 2
            && (1..distance).all(|i| self.is_occupied(mv.x_start + dx * i, mv.y_start + dy * i))
            && !self.is_occupied(mv.x_end, mv.y_end)
    }

    fn fox_slide(&self, fox: Fox, mv: &Move) -> Option<Vec<(Cell, Cell)>> {
        if mv.direction() != fox.orientation.axis() {
            return None;
        }
        let (dx, dy) = mv.step()?;
        let distance = mv.distance();

        let (ox, oy) = fox.partner_offset();
        let (px, py) = (mv.x_start + ox, mv.y_start + oy);
        if self.piece(px, py) != Some(Piece::Fox(fox.partner())) {
            return None;
        }

        // The half lying further along the direction of travel leads the slide.
        let (lead_x, lead_y) = if (ox, oy) == (dx, dy) {
            (px, py)
        } else {
            (mv.x_start, mv.y_start)
        };
        for i in 1..=distance {
            let (cx, cy) = (lead_x + dx * i, lead_y + dy * i);
            if cell(cx, cy).is_none() || self.is_occupied(cx, cy) {
                return None;
            }
        }

        let from = cell(mv.x_start, mv.y_start)?;
        let to = cell(mv.x_end, mv.y_end)?;
        let partner_from = cell(px, py)?;
        let partner_to = cell(px + dx * distance, py + dy * distance)?;
        Some(vec![(from, to), (partner_from, partner_to)])
    }

    /// Lifts every moving piece before setting any of them down, so that
    /// overlapping source and destination cells are handled correctly.
    fn apply(&mut self, relocation: &[(Cell, Cell)]) {
        let lifted: Vec<Option<Piece>> = relocation
            .iter()
            .map(|&((x, y), _)| self.grid[y][x].take())
            .collect();
        for (&(_, (x, y)), piece) in relocation.iter().zip(lifted) {
            self.grid[y][x].occupant = piece;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for Board {
    /// Writes the board string: one token per tile, row-major, separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.grid.iter().flatten().map(Tile::token).collect();
        f.write_str(&tokens.join(" "))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("name", &self.name)
            .field("layout", &self.to_string())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(DEFAULT_NAME, s)
    }
}
