//! Search-graph vertices.

use std::collections::HashSet;

use crate::engine::Board;
use crate::moves::Move;

/// A vertex of the puzzle's state graph.
///
/// A node owns a private, listener-free snapshot of a board and never changes
/// it after construction, so it is safe to use as a key in hash sets and maps.
/// Two nodes are equal when their boards hold equal pieces on every tile,
/// regardless of how either configuration was reached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    board: Board,
}

impl Node {
    /// Wraps a deep copy of `board`. Later changes to `board` do not affect the node.
    pub fn new(board: &Board) -> Self {
        Node {
            board: board.snapshot(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Expands this node: one child per possible move, each built on a fresh copy
    /// of the board. Moves leading to the same configuration yield a single child.
    pub fn children(&self) -> HashSet<Node> {
        self.board
            .possible_moves()
            .iter()
            .filter_map(|mv| self.child(mv))
            .collect()
    }

    pub fn is_winning_node(&self) -> bool {
        self.board.is_in_winning_state()
    }

    /// Finds the move that turns this node into `other`.
    ///
    /// The graph only records which node was reached from which, so the move is
    /// recovered by replaying this node's possible moves until one produces a
    /// board equal to `other`.
    ///
    /// # Returns
    /// The first matching move in `possible_moves` order, or `Move::INVALID` when
    /// `other` is not one move away.
    pub fn move_to(&self, other: &Node) -> Move {
        self.board
            .possible_moves()
            .into_iter()
            .find(|mv| self.child(mv).as_ref() == Some(other))
            .unwrap_or(Move::INVALID)
    }

    fn child(&self, mv: &Move) -> Option<Node> {
        let mut board = self.board.snapshot();
        board.move_piece(mv).then_some(Node { board })
    }
}
