//! Navigation between configured tables.

/// Index of the active table among `len` configured tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableNav {
    active: usize,
    len: usize,
}

impl TableNav {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.active = if self.active == 0 {
                self.len - 1
            } else {
                self.active - 1
            };
        }
    }

    /// Jump to `index`. Returns false, leaving the active table unchanged,
    /// when no such table exists.
    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.len {
            self.active = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_both_ways() {
        let mut nav = TableNav::new(3);
        nav.previous();
        assert_eq!(nav.active(), 2);
        nav.next();
        assert_eq!(nav.active(), 0);
        nav.next();
        assert_eq!(nav.active(), 1);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut nav = TableNav::new(2);
        assert!(nav.jump(1));
        assert!(!nav.jump(5));
        assert_eq!(nav.active(), 1);
    }

    #[test]
    fn test_empty_nav_is_inert() {
        let mut nav = TableNav::new(0);
        nav.next();
        nav.previous();
        assert_eq!(nav.active(), 0);
        assert!(nav.is_empty());
    }
}
