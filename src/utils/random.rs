use rand::Rng;

use crate::config::settings::DemoConfig;

/// Produces chaos data for the interactive `random` command.
pub struct RandomNumbers {
    config: DemoConfig,
}

impl RandomNumbers {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn generate(&self) -> Vec<f64> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Between `min_count` and `max_count` values, rounded to 2 decimals.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let (min_count, max_count) = ordered(self.config.min_count, self.config.max_count);
        let (min_value, max_value) = ordered(self.config.min_value, self.config.max_value);

        let count = rng.gen_range(min_count..=max_count);
        (0..count)
            .map(|_| {
                let value = if min_value < max_value {
                    rng.gen_range(min_value..=max_value)
                } else {
                    min_value
                };
                (value * 100.0).round() / 100.0
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
