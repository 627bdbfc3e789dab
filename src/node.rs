use crate::engine::{Board, Direction};

/// Handle to a node stored in a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A node in the search tree.
///
/// Nodes are stored in a flat arena and reference their parent by handle.
/// Nothing points from a parent to its children, so the tree can only be
/// walked backwards from a leaf.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board reached by this node. Owned by the node.
    pub board: Board,
    /// Number of moves from the root.
    pub cost: u32,
    /// Heuristic estimate, computed once when the node is created.
    pub heuristic: u32,
    /// Move that produced this board, `None` for the root.
    pub direction: Option<Direction>,
    /// Parent handle, `None` for the root.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// Total estimated cost `g + h`.
    pub fn total_cost(&self) -> u32 {
        self.cost + self.heuristic
    }
}

/// Arena of every node created during one search run.
///
/// Nodes are never removed. Nodes that beam search drops from the frontier
/// stay allocated until the tree is dropped at the end of the run, so memory
/// grows with `nodes_generated`, not with the beam width.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the root node (g = 0).
    pub fn add_root(&mut self, board: Board, heuristic: u32) -> NodeId {
        self.push(SearchNode {
            board,
            cost: 0,
            heuristic,
            direction: None,
            parent: None,
        })
    }

    /// Adds a child of `parent` reached by `direction`, with g = parent g + 1.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        direction: Direction,
        board: Board,
        heuristic: u32,
    ) -> NodeId {
        let cost = self[parent].cost + 1;
        self.push(SearchNode {
            board,
            cost,
            heuristic,
            direction: Some(direction),
            parent: Some(parent),
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walks parent handles from `terminal` back to the root.
    ///
    /// Returns the moves in root-to-terminal order together with one board per
    /// step, starting with the root board, so `boards.len() == moves.len() + 1`.
    pub fn reconstruct_path(&self, terminal: NodeId) -> (Vec<Direction>, Vec<Board>) {
        let mut moves = Vec::new();
        let mut boards = Vec::new();
        let mut current = Some(terminal);

        while let Some(id) = current {
            let node = &self[id];
            boards.push(node.board);
            if let Some(dir) = node.direction {
                moves.push(dir);
            }
            current = node.parent;
        }

        moves.reverse();
        boards.reverse();
        (moves, boards)
    }
}

impl std::ops::Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
