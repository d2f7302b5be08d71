//! Sequential zone routing.

use crate::report::ZoneReport;
use duff_routing::{route_family, SharingConfig};
use duff_terrain::Zone;
use duff_trace::TraceSink;
use std::time::Instant;

/// Route litter within every patch family of a zone, in registration
/// order.
///
/// One redistribution pass runs per family per invocation; inert
/// families (≤1 patch) are skipped. The trace sink observes every
/// family in order. Families are independent, so the zone result does
/// not depend on processing order — see
/// [`route_zone_parallel`](crate::route_zone_parallel) for the
/// worker-pool equivalent.
pub fn route_zone(zone: &mut Zone, config: &SharingConfig, sink: &mut dyn TraceSink) -> ZoneReport {
    let start = Instant::now();
    let reports = zone
        .families_mut()
        .map(|family| route_family(family, config, sink))
        .collect();
    ZoneReport::from_reports(reports, start.elapsed().as_micros() as u64)
}
