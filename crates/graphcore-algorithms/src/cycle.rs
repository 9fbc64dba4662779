//! Cycle detection on successor chains (Floyd's tortoise and hare)

use super::common::GraphView;
use super::error::{AlgoError, AlgoResult};

/// Arena of nodes with at most one successor each (a singly linked structure).
///
/// Nodes are addressed by index; a missing successor ends the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessorChain {
    next: Vec<Option<usize>>,
}

impl SuccessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` unlinked nodes
    pub fn with_len(len: usize) -> Self {
        SuccessorChain { next: vec![None; len] }
    }

    /// Linear chain `0 -> 1 -> ... -> len-1`, whose last node optionally
    /// points back at `tail_target`.
    pub fn linear(len: usize, tail_target: Option<usize>) -> AlgoResult<Self> {
        let mut chain = Self::with_len(len);
        for i in 1..len {
            chain.link(i - 1, i)?;
        }
        if let (Some(target), Some(last)) = (tail_target, len.checked_sub(1)) {
            chain.link(last, target)?;
        }
        Ok(chain)
    }

    /// Append an unlinked node and return its index
    pub fn push(&mut self) -> usize {
        self.next.push(None);
        self.next.len() - 1
    }

    /// Set (or replace) the successor of `from`.
    pub fn link(&mut self, from: usize, to: usize) -> AlgoResult<()> {
        let vertex_count = self.next.len();
        if to >= vertex_count {
            return Err(AlgoError::VertexOutOfRange { index: to, vertex_count });
        }
        let slot = self
            .next
            .get_mut(from)
            .ok_or(AlgoError::VertexOutOfRange { index: from, vertex_count })?;
        *slot = Some(to);
        Ok(())
    }

    pub fn successor(&self, node: usize) -> Option<usize> {
        self.next.get(node).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Chain over the view's dense indices.
    ///
    /// Fails with [`AlgoError::MultipleSuccessors`] if any vertex has an
    /// out-degree above one.
    pub fn from_view(view: &GraphView) -> AlgoResult<Self> {
        let mut next = Vec::with_capacity(view.node_count);
        for idx in 0..view.node_count {
            match view.successors(idx) {
                [] => next.push(None),
                [single] => next.push(Some(*single)),
                _ => return Err(AlgoError::MultipleSuccessors(view.node_at(idx))),
            }
        }
        Ok(SuccessorChain { next })
    }
}

/// Whether following successors from `start` ever revisits a node.
///
/// The tortoise moves one step and the hare two per round; every step checks
/// for the end of the chain first. `None` (an empty chain) or a start with no
/// successor is never cyclic.
pub fn detect_cycle(chain: &SuccessorChain, start: Option<usize>) -> bool {
    let Some(start) = start else {
        return false;
    };

    let mut tortoise = start;
    let mut hare = start;

    loop {
        for _ in 0..2 {
            hare = match chain.successor(hare) {
                Some(next) => next,
                None => return false,
            };
        }
        tortoise = match chain.successor(tortoise) {
            Some(next) => next,
            None => return false,
        };

        if hare == tortoise {
            return true;
        }
    }
}
