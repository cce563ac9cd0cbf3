use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Share of accesses that stay near the current locality center.
const LOCALITY_BIAS: f64 = 0.8;
/// Bounds for how many accesses a locality run lasts.
const MIN_RUN_LENGTH: usize = 5;
const MAX_RUN_LENGTH: usize = 20;
/// Largest offset from the locality center on a local access.
const MAX_OFFSET: usize = 4;

/// Seeded generator of logical page numbers for one process.
///
/// Most accesses cluster in a small window above a locality center
/// that drifts every few accesses; the rest are uniform over the whole
/// page range. The same seed always yields the same sequence.
pub struct AccessPatternGenerator {
    num_pages: usize,
    rng: StdRng,
    locality_center: usize,
    run_left: usize,
}

impl AccessPatternGenerator {
    pub fn new(num_pages: usize, seed: u64) -> Self {
        assert!(num_pages > 0, "a process has at least one page");
        AccessPatternGenerator {
            num_pages,
            rng: StdRng::seed_from_u64(seed),
            locality_center: 0,
            run_left: 0,
        }
    }

    fn next_page(&mut self) -> usize {
        if self.run_left == 0 {
            self.locality_center = self.rng.gen_range(0..self.num_pages);
            self.run_left = self.rng.gen_range(MIN_RUN_LENGTH..=MAX_RUN_LENGTH);
        }
        self.run_left -= 1;

        if self.rng.gen_bool(LOCALITY_BIAS) {
            let offset = self.rng.gen_range(0..=MAX_OFFSET.min(self.num_pages - 1));
            // Saturate at the last page, never wrap.
            (self.locality_center + offset).min(self.num_pages - 1)
        } else {
            self.rng.gen_range(0..self.num_pages)
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<usize> {
        (0..count).map(|_| self.next_page()).collect()
    }
}
