//! Engine configuration.

/// Configuration for [`route_zone_parallel`](crate::route_zone_parallel).
///
/// Controls the size of the worker pool that families are fanned out
/// to. The default auto-detects from the machine.
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[2, 16]`).
    pub worker_count: Option<usize>,
}

impl EngineConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; zero workers would
    /// never route anything.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4);
                (cpus / 2).clamp(2, 16)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_count_is_clamped() {
        let zero = EngineConfig {
            worker_count: Some(0),
        };
        assert_eq!(zero.resolved_worker_count(), 1);

        let huge = EngineConfig {
            worker_count: Some(1000),
        };
        assert_eq!(huge.resolved_worker_count(), 64);

        let four = EngineConfig {
            worker_count: Some(4),
        };
        assert_eq!(four.resolved_worker_count(), 4);
    }

    #[test]
    fn auto_detection_stays_in_bounds() {
        let auto = EngineConfig::default();
        let n = auto.resolved_worker_count();
        assert!((2..=16).contains(&n));
    }
}
