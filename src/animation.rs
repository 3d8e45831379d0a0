pub const COUNTER_DURATION_MS: u32 = 1_500;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const LOADING_DURATION_MS: f64 = 1_200.0;
pub const LOADING_EXIT_DELAY_MS: u32 = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: u32,
    accumulated: f64,
    value: u32,
    started: bool,
    finished: bool,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            accumulated: 0.0,
            value: 0,
            started: false,
            finished: false,
        }
    }

    pub fn step(&self) -> f64 {
        f64::from(self.target) / (f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_FRAME_MS))
    }

    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advances one frame. Returns whether more frames are needed.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.finished {
            return false;
        }

        self.accumulated += self.step();
        if self.accumulated >= f64::from(self.target) {
            self.value = self.target;
            self.finished = true;
        } else {
            self.value = self.accumulated.floor() as u32;
        }
        !self.finished
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.finished
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

pub fn loading_progress(elapsed_ms: f64) -> f64 {
    let linear = (elapsed_ms / LOADING_DURATION_MS).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - linear) * (1.0 - linear);
    eased * 100.0
}

pub fn loading_complete(elapsed_ms: f64) -> bool {
    elapsed_ms >= LOADING_DURATION_MS
}

pub fn percent_label(progress: f64) -> String {
    format!("{}%", progress.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut Counter) -> usize {
        let mut frames = 0;
        while counter.tick() {
            frames += 1;
            assert!(frames < 1_000, "counter never finished");
        }
        frames + 1
    }

    #[test]
    fn counter_reaches_target_exactly() {
        let mut counter = Counter::new(15);
        assert!(counter.start());

        let frames = run_to_end(&mut counter);

        assert_eq!(counter.value(), 15);
        assert!(counter.is_finished());
        assert!(!counter.is_running());
        assert_eq!(frames, 94);
    }

    #[test]
    fn counter_values_are_monotonic_and_never_exceed_target() {
        let mut counter = Counter::new(70);
        counter.start();

        let mut last = 0;
        while counter.tick() {
            assert!(counter.value() >= last);
            assert!(counter.value() <= 70);
            last = counter.value();
        }
        assert_eq!(counter.value(), 70);
    }

    #[test]
    fn counter_does_not_move_before_start() {
        let mut counter = Counter::new(5);

        assert!(!counter.tick());
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn counter_starts_at_most_once() {
        let mut counter = Counter::new(4);

        assert!(counter.start());
        run_to_end(&mut counter);
        assert!(!counter.start());
        assert!(!counter.tick());
        assert_eq!(counter.value(), 4);
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut counter = Counter::new(0);
        counter.start();

        assert!(!counter.tick());
        assert_eq!(counter.value(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn loading_progress_eases_out_and_clamps() {
        assert_eq!(loading_progress(0.0), 0.0);
        assert_eq!(loading_progress(600.0), 75.0);
        assert_eq!(loading_progress(1_200.0), 100.0);
        assert_eq!(loading_progress(5_000.0), 100.0);
        assert_eq!(loading_progress(-10.0), 0.0);
        assert!(loading_complete(1_200.0));
        assert!(!loading_complete(1_199.0));
    }

    #[test]
    fn percent_label_rounds() {
        assert_eq!(percent_label(74.6), "75%");
        assert_eq!(percent_label(100.0), "100%");
    }
}
