/// Which way a carousel moves when it changes slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Circular slide index over a fixed number of slides.
///
/// All index math wraps at both ends. A store with fewer than two slides
/// never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStore {
    len: usize,
    current: usize,
}

impl SlideStore {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn prev_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current + self.len - 1) % self.len
    }

    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.current + 1) % self.len
    }

    /// Step one slide. Returns false when there is nowhere to go.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.len < 2 {
            return false;
        }
        self.current = match direction {
            Direction::Forward => self.next_index(),
            Direction::Backward => self.prev_index(),
        };
        true
    }

    /// Jump to `index`. Out of range or already current is a no-op.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}
