use super::trace::Trace;
use super::types::{PageNumber, VIRTUAL_PAGES};

/// Future references of a single page plus a cursor over them
#[derive(Debug, Clone, Default)]
struct FutureUses {
    positions: Vec<usize>,
    cursor: usize,
}

/// Per-page ascending trace positions, used by the optimal policy to see
/// when each resident page will be needed next.
#[derive(Debug, Clone)]
pub struct LookaheadIndex {
    pages: Vec<FutureUses>,
}

impl LookaheadIndex {
    /// Build the index over a whole trace
    pub fn build(trace: &Trace) -> Self {
        let mut pages = vec![FutureUses::default(); VIRTUAL_PAGES];
        for (position, page) in trace.pages().enumerate() {
            pages[usize::from(page)].positions.push(position);
        }
        Self { pages }
    }

    /// Next unconsumed reference of `page`, or `None` if it is never used again
    pub fn next_use(&self, page: PageNumber) -> Option<usize> {
        let uses = &self.pages[usize::from(page)];
        uses.positions.get(uses.cursor).copied()
    }

    /// Consume one reference of `page`. Saturates once every reference is consumed.
    pub fn advance(&mut self, page: PageNumber) {
        let uses = &mut self.pages[usize::from(page)];
        if uses.cursor < uses.positions.len() {
            uses.cursor += 1;
        }
    }

    /// Number of references of `page` not yet consumed
    pub fn remaining(&self, page: PageNumber) -> usize {
        let uses = &self.pages[usize::from(page)];
        uses.positions.len() - uses.cursor
    }
}
