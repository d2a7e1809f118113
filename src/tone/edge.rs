/// Single-sample rising edge detector.
///
/// Starts from a released (`false`) previous sample, so a line that is
/// already high on the first update counts as a rising edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { previous: false }
    }

    /// Records `current` and returns whether it rose from the previous sample.
    pub fn rising(&mut self, current: bool) -> bool {
        let rose = current && !self.previous;
        self.previous = current;
        rose
    }

    pub const fn previous(&self) -> bool {
        self.previous
    }
}
