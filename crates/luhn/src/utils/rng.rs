use crate::abstract_trait::DigitSourceTrait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::{LazyLock, Mutex, MutexGuard};

// Seeded from OS entropy on first use, once per process.
static PROCESS_RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

fn lock(rng: &Mutex<StdRng>) -> MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Draws from the process-wide generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessDigitSource;

impl DigitSourceTrait for ProcessDigitSource {
    fn next_digit(&self) -> u8 {
        lock(&PROCESS_RNG).random_range(0..10)
    }

    fn fill_digits(&self, out: &mut String, count: usize) {
        out.reserve(count);
        let mut rng = lock(&PROCESS_RNG);
        for _ in 0..count {
            out.push(char::from(b'0' + rng.random_range(0..10u8)));
        }
    }
}

/// Owns its generator; the same seed always yields the same digits.
#[derive(Debug)]
pub struct SeededDigitSource {
    rng: Mutex<StdRng>,
}

impl SeededDigitSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl DigitSourceTrait for SeededDigitSource {
    fn next_digit(&self) -> u8 {
        lock(&self.rng).random_range(0..10)
    }
}
