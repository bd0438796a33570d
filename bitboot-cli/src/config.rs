//! Runtime configuration for the front-end collaborators.
//!
//! The engine itself takes no configuration; everything here feeds the
//! boot theatrics and the session log.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Delay multiplier for boot theatrics: 2.0 is twice as slow,
    /// 0.5 twice as fast, 0 disables delays entirely.
    pub speed: f64,
    /// Directory holding the dated session log.
    pub log_dir: PathBuf,
    pub no_log: bool,
    pub no_color: bool,
}

impl Config {
    /// Scales a base delay by the speed multiplier. `None` means
    /// "don't sleep at all" (speed 0, or a delay that rounds to 0).
    pub fn delay(&self, base_ms: u64) -> Option<Duration> {
        let ms = (base_ms as f64 * self.speed).round() as u64;
        (ms > 0).then(|| Duration::from_millis(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(speed: f64) -> Config {
        Config {
            speed,
            log_dir: PathBuf::from("logs"),
            no_log: true,
            no_color: true,
        }
    }

    #[test]
    fn test_speed_zero_disables_delays() {
        assert_eq!(config(0.0).delay(400), None);
    }

    #[test]
    fn test_speed_scales_delays() {
        assert_eq!(config(1.0).delay(400), Some(Duration::from_millis(400)));
        assert_eq!(config(0.5).delay(400), Some(Duration::from_millis(200)));
        assert_eq!(config(2.0).delay(400), Some(Duration::from_millis(800)));
    }
}
