use crate::config::Config;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    seeded_rng: Option<Arc<Mutex<StdRng>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let seeded_rng = config
            .flips
            .seed
            .map(|seed| Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));

        Self {
            config: Arc::new(config),
            seeded_rng,
        }
    }

    /// Run `f` against this server's flip source
    ///
    /// Without a configured seed every call uses the calling thread's own
    /// generator. With a seed, all requests share one generator and the lock
    /// is held for the whole of `f`, so a request's flips are contiguous in
    /// the seeded stream.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.seeded_rng {
            Some(rng) => {
                // A panic mid-request leaves the generator in a valid state
                let mut guard = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                f(&mut *guard)
            }
            None => f(&mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::count_flips;

    fn seeded(seed: u64) -> AppState {
        let mut config = Config::default();
        config.flips.seed = Some(seed);
        AppState::new(config)
    }

    #[test]
    fn test_seeded_state_is_reproducible() {
        let first = seeded(17).with_rng(|rng| count_flips(rng, 200));
        let second = seeded(17).with_rng(|rng| count_flips(rng, 200));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_state_counts_all_flips() {
        let state = AppState::new(Config::default());
        let tally = state.with_rng(|rng| count_flips(rng, 64));
        assert_eq!(tally.flips(), 64);
    }
}
