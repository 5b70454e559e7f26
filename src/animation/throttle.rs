/// Per-instance tick counter that fires once every `every` ticks.
///
/// Owned by whoever needs to skip work between timer ticks, e.g. emitting
/// only every Nth animation frame.
#[derive(Debug, Clone)]
pub struct Throttle {
    every: u32,
    ticks: u64,
}

impl Throttle {
    /// `every` below 1 is treated as 1 (fire on every tick)
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            ticks: 0,
        }
    }

    /// Count one tick. Returns true on every `every`-th tick.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        self.ticks % u64::from(self.every) == 0
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn every(&self) -> u32 {
        self.every
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(1)
    }
}
