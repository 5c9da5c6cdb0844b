pub const REVEAL_SELECTOR: &str = "section";
pub const REVEAL_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const STATS_SECTION_SELECTOR: &str = "#about";
pub const STAT_SELECTOR: &str = ".stat-number";
pub const STATS_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// True exactly once per element: the first time it intersects.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}
