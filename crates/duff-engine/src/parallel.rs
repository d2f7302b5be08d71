//! Worker-pool zone routing.

use crate::config::EngineConfig;
use crate::report::ZoneReport;
use duff_routing::{route_family, FamilyReport, SharingConfig};
use duff_terrain::{PatchFamily, Zone};
use duff_trace::NullSink;
use std::time::Instant;

/// Route litter within every patch family of a zone using a worker
/// pool.
///
/// Families share no patches, so each worker mutates its families
/// without synchronization beyond the task channel. Reports are
/// reassembled into zone registration order; the resulting patch state
/// and reports (timing aside) are identical to
/// [`route_zone`](crate::route_zone).
///
/// Diagnostics are inherently ordered, so this path routes untraced;
/// use the sequential driver when a trace stream is wanted.
pub fn route_zone_parallel(
    zone: &mut Zone,
    config: &SharingConfig,
    engine: &EngineConfig,
) -> ZoneReport {
    let start = Instant::now();
    let workers = engine.resolved_worker_count();

    let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, &mut PatchFamily)>();
    let (report_tx, report_rx) = crossbeam_channel::unbounded::<(usize, FamilyReport)>();

    let mut family_count = 0;
    for task in zone.families_mut().enumerate() {
        // Receiver ends are still alive; an unbounded send cannot fail here.
        let _ = task_tx.send(task);
        family_count += 1;
    }
    drop(task_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers.min(family_count.max(1)) {
            let task_rx = task_rx.clone();
            let report_tx = report_tx.clone();
            scope.spawn(move || {
                while let Ok((index, family)) = task_rx.recv() {
                    let report = route_family(family, config, &mut NullSink);
                    let _ = report_tx.send((index, report));
                }
            });
        }
    });
    drop(report_tx);

    let mut indexed: Vec<(usize, FamilyReport)> = report_rx.iter().collect();
    indexed.sort_by_key(|&(index, _)| index);
    let reports = indexed.into_iter().map(|(_, report)| report).collect();

    ZoneReport::from_reports(reports, start.elapsed().as_micros() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route_zone;
    use duff_test_utils::seeded_zone;

    fn strip_timing(mut report: ZoneReport) -> ZoneReport {
        report.elapsed_us = 0;
        report
    }

    #[test]
    fn parallel_matches_sequential() {
        for seed in [1u64, 7, 42] {
            let mut sequential = seeded_zone(seed, 9, 7);
            let mut parallel = sequential.clone();
            let config = SharingConfig::from_defaults(sequential.defaults());

            let seq_report = route_zone(&mut sequential, &config, &mut NullSink);
            let par_report = route_zone_parallel(
                &mut parallel,
                &config,
                &EngineConfig {
                    worker_count: Some(4),
                },
            );

            assert_eq!(strip_timing(seq_report), strip_timing(par_report));
            for (a, b) in sequential.families().zip(parallel.families()) {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn single_worker_pool_works() {
        let mut zone = seeded_zone(3, 4, 5);
        let config = SharingConfig::from_defaults(zone.defaults());
        let report = route_zone_parallel(
            &mut zone,
            &config,
            &EngineConfig {
                worker_count: Some(1),
            },
        );
        assert_eq!(report.families.len(), 4);
    }

    #[test]
    fn empty_zone_produces_an_empty_report() {
        let mut zone = seeded_zone(5, 0, 0);
        let config = SharingConfig::from_defaults(zone.defaults());
        let report = route_zone_parallel(&mut zone, &config, &EngineConfig::default());
        assert!(report.families.is_empty());
        assert_eq!(report.routed, 0);
    }
}
