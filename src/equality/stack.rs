use crate::errors::ice;

#[derive(Debug, Default)]
/// The pairs of composite values whose comparison is in progress, keyed by
/// their addresses. Meeting a pair again means the values are cyclic and the
/// outer comparison will decide the result.
pub(super) struct PairStack {
    pairs: Vec<(usize, usize)>,
}

impl PairStack {
    pub(super) fn contains(&self, pair: (usize, usize)) -> bool {
        self.pairs.contains(&pair)
    }

    pub(super) fn push(&mut self, pair: (usize, usize)) {
        self.pairs.push(pair);
    }

    pub(super) fn pop(&mut self, pair: (usize, usize)) {
        match self.pairs.pop() {
            Some(top) if top == pair => {},
            _ => ice("comparison stack popped out of order"),
        }
    }
}
