/// Current/previous slide pair.
///
/// `prev` is only used to know which slide's active marker to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideIndex {
    current: usize,
    prev: Option<usize>,
}

impl SlideIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.current
    }

    pub fn get_prev(&self) -> Option<usize> {
        self.prev
    }

    /// Move to `index`, remembering where we came from.
    pub fn set(&mut self, index: usize) {
        self.prev = Some(self.current);
        self.current = index;
    }
}
