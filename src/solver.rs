use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::engine::Board;
use crate::moves::Move;
use crate::node::Node;
use crate::piece::Piece;

/// Counters describing the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the queue and expanded.
    pub expanded: usize,
    /// Distinct configurations seen, the root included.
    pub discovered: usize,
}

/// Finds shortest winning paths and hands them out one move at a time.
///
/// The solver remembers the last path it computed. As long as the board it is
/// asked about lies on that path, the next move is read from the cached path
/// instead of searching again.
///
/// # Examples
/// ```
/// use jumpin_solver::engine::Board;
/// use jumpin_solver::solver::Solver;
///
/// let mut board = Board::new();
/// let mut solver = Solver::new();
/// while !board.is_in_winning_state() {
///     let hint = solver.next_best_move(&board);
///     assert!(board.move_piece(&hint));
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    last_path: Option<Vec<Node>>,
    last_stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    /// Returns the next move of a shortest winning path from `board`.
    ///
    /// # Returns
    /// `Move::INVALID` when `board` is already winning or cannot be solved.
    pub fn next_best_move(&mut self, board: &Board) -> Move {
        let node = Node::new(board);

        let cached = self
            .last_path
            .as_ref()
            .is_some_and(|path| path.contains(&node));
        if !cached {
            let path = self.shortest_path(&node);
            self.last_path = Some(clean_path(path));
        } else {
            debug!(board = board.name(), "answering from cached path");
        }

        let Some(path) = self.last_path.as_ref() else {
            return Move::INVALID;
        };
        match path.iter().position(|n| *n == node) {
            Some(i) if i + 1 < path.len() => node.move_to(&path[i + 1]),
            _ => Move::INVALID,
        }
    }

    /// Computes the full sequence of moves from `board` to a winning board, after
    /// path cleaning. The result is empty if `board` is winning or unsolvable.
    ///
    /// The computed path becomes the cached path for `next_best_move`.
    pub fn solve(&mut self, board: &Board) -> Vec<Move> {
        let root = Node::new(board);
        let path = clean_path(self.shortest_path(&root));
        let moves = path.windows(2).map(|w| w[0].move_to(&w[1])).collect();
        self.last_path = Some(path);
        moves
    }

    /// Breadth-first search from `root` to the nearest winning node.
    ///
    /// # Returns
    /// The nodes of a shortest path, `root` first and the winning node last.
    /// Empty if `root` is already winning or no winning node is reachable.
    pub fn shortest_path(&mut self, root: &Node) -> Vec<Node> {
        self.last_stats = SearchStats::default();
        if root.is_winning_node() {
            return Vec::new();
        }

        let mut queue = VecDeque::new();
        let mut visited: HashSet<Node> = HashSet::new();
        let mut parents: HashMap<Node, Node> = HashMap::new();

        queue.push_back(root.clone());
        visited.insert(root.clone());
        self.last_stats.discovered = 1;

        while let Some(current) = queue.pop_front() {
            self.last_stats.expanded += 1;

            for child in current.children() {
                if visited.contains(&child) {
                    continue;
                }
                visited.insert(child.clone());
                self.last_stats.discovered += 1;
                parents.insert(child.clone(), current.clone());

                if child.is_winning_node() {
                    let path = walk_back(&parents, child);
                    debug!(
                        moves = path.len() - 1,
                        expanded = self.last_stats.expanded,
                        discovered = self.last_stats.discovered,
                        "found winning path"
                    );
                    return path;
                }
                queue.push_back(child);
            }
        }

        debug!(
            expanded = self.last_stats.expanded,
            discovered = self.last_stats.discovered,
            "search exhausted without a winning configuration"
        );
        Vec::new()
    }

    /// The path cached by the last search, if any.
    pub fn last_path(&self) -> Option<&[Node]> {
        self.last_path.as_deref()
    }

    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    pub fn clear_cache(&mut self) {
        self.last_path = None;
    }
}

/// Rebuilds the path ending at `goal` by following parent links to the root.
fn walk_back(parents: &HashMap<Node, Node>, goal: Node) -> Vec<Node> {
    let mut path = VecDeque::new();
    let mut current = goal;
    while let Some(parent) = parents.get(&current) {
        let parent = parent.clone();
        path.push_front(current);
        current = parent;
    }
    path.push_front(current);
    path.into()
}

/// The piece that moves between two consecutive path nodes.
fn moved_piece(from: &Node, to: &Node) -> Option<Piece> {
    let mv = from.move_to(to);
    from.board().piece(mv.x_start, mv.y_start)
}

/// Drops hint noise from a path: when the same fox moves in two consecutive
/// steps, the node between those steps is removed.
///
/// Nodes are marked while scanning the original path and removed afterwards.
/// The shortened path is not re-validated, so a removed node may leave two
/// neighbours that are not one move apart.
pub fn clean_path(path: Vec<Node>) -> Vec<Node> {
    if path.len() < 3 {
        return path;
    }

    let mut marked = vec![false; path.len()];
    for i in 0..path.len() - 2 {
        let first = moved_piece(&path[i], &path[i + 1]);
        let second = moved_piece(&path[i + 1], &path[i + 2]);
        if let (Some(Piece::Fox(a)), Some(Piece::Fox(b))) = (first, second) {
            if a.pair == b.pair {
                marked[i + 1] = true;
            }
        }
    }

    if marked.iter().any(|&m| m) {
        debug!(
            removed = marked.iter().filter(|&&m| m).count(),
            "cleaned repeated fox moves from path"
        );
    }
    path.into_iter()
        .zip(marked)
        .filter_map(|(node, m)| (!m).then_some(node))
        .collect()
}
