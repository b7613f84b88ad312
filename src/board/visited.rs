use crate::board::square::Square;

/// Per-attempt visited table. Each slot holds the 1-based move number that
/// reached the square, or 0 while unvisited.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    size: usize,
    marks: Vec<u32>,
    count: usize,
}

impl VisitedSet {
    pub fn new(size: usize) -> Self {
        Self { size, marks: vec![0; size * size], count: 0 }
    }

    pub fn clear(&mut self) {
        self.marks.fill(0);
        self.count = 0;
    }

    pub fn size(&self) -> usize { self.size }

    /// Number of squares marked so far.
    pub fn len(&self) -> usize { self.count }

    pub fn is_empty(&self) -> bool { self.count == 0 }

    pub fn is_visited(&self, sq: Square) -> bool { self.marks[sq.index(self.size)] != 0 }

    /// Marks `sq` as the next square of the path and returns its move number.
    pub fn mark(&mut self, sq: Square) -> u32 {
        let idx = sq.index(self.size);
        debug_assert_eq!(self.marks[idx], 0, "square {sq} visited twice");
        self.count += 1;
        let move_no = self.count as u32;
        self.marks[idx] = move_no;
        move_no
    }

    pub fn move_number(&self, sq: Square) -> Option<u32> {
        match self.marks[sq.index(self.size)] { 0 => None, n => Some(n) }
    }

    pub fn is_full(&self) -> bool { self.count == self.marks.len() }
}
