//! Per-record enrichment pipeline and the batch driver.
//!
//! Stage order for every record:
//! 1. reconcile against the mailing-list entry (may reverse-geocode)
//! 2. normalize
//! 3. fill city/state from the zip database
//! 4. classify the metro area
//! 5. diff against the snapshot taken before step 1
//!
//! Records share nothing but read-only tables and lookup services, so the
//! batch runs them in parallel and keeps the input order in the output.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::warn;

use crate::error::RecordError;
use crate::metro::{classify_metro, fill_via_zip, ZipDatabase};
use crate::models::{
    AddressRecord, ChangeSet, EnrichStats, EnrichmentReport, MailingListEntry, RecordFailure,
    RecordUpdate,
};
use crate::normalize::normalize;
use crate::progress::ParallelProgress;
use crate::reconcile::{reconcile, Reconciliation, ReverseGeocoder};
use crate::tables::ReferenceTables;

/// Mailing-list entries keyed by email.
pub type MailingList = FxHashMap<String, MailingListEntry>;

/// Result of enriching one record.
#[derive(Clone, Debug)]
pub struct Enriched {
    pub record: AddressRecord,
    pub changes: ChangeSet,
    pub reconciliation: Reconciliation,
    pub zip_filled: bool,
}

impl Enriched {
    fn stats(&self) -> EnrichStats {
        let mut stats = EnrichStats {
            total_records: 1,
            zip_fills: usize::from(self.zip_filled),
            metro_assigned: usize::from(!self.record.metro.is_empty()),
            records_changed: usize::from(!self.changes.is_empty()),
            ..Default::default()
        };
        match self.reconciliation {
            Reconciliation::NoEntry => stats.no_mailing_entry = 1,
            Reconciliation::MetroComputable => stats.skipped_metro_computable = 1,
            Reconciliation::AddressLabel => stats.via_address_label = 1,
            Reconciliation::Coordinates => stats.via_coordinates = 1,
            Reconciliation::CityStateCountry => stats.via_city_state_country = 1,
            Reconciliation::NoMatch => stats.unmatched_mailing_entries = 1,
        }
        stats
    }
}

/// Runs the stage sequence against shared reference data and collaborators.
pub struct Enricher<'a> {
    pub tables: &'a ReferenceTables,
    pub geocoder: &'a dyn ReverseGeocoder,
    pub zip_db: &'a dyn ZipDatabase,
}

impl<'a> Enricher<'a> {
    pub fn new(
        tables: &'a ReferenceTables,
        geocoder: &'a dyn ReverseGeocoder,
        zip_db: &'a dyn ZipDatabase,
    ) -> Self {
        Self {
            tables,
            geocoder,
            zip_db,
        }
    }

    /// Enrich one record. On error the record is dropped; nothing partial is
    /// returned.
    pub fn enrich(
        &self,
        mut record: AddressRecord,
        entry: Option<&MailingListEntry>,
    ) -> Result<Enriched, RecordError> {
        let snapshot = record.clone();

        let reconciliation = reconcile(&mut record, entry, self.geocoder, &self.tables.addresses)
            .map_err(|e| RecordError::lookup(snapshot.uid(), e))?;
        normalize(&mut record)?;
        let zip_filled = fill_via_zip(&mut record, self.zip_db)
            .map_err(|e| RecordError::lookup(snapshot.uid(), e))?;
        classify_metro(&mut record, self.tables);

        let changes = record.diff(&snapshot);
        Ok(Enriched {
            record,
            changes,
            reconciliation,
            zip_filled,
        })
    }

    /// Enrich every record, joining each to its mailing-list entry by email.
    pub fn enrich_all(
        &self,
        records: Vec<AddressRecord>,
        mailing_list: &MailingList,
    ) -> (EnrichmentReport, EnrichStats) {
        let start = Instant::now();
        let total = records.len() as u64;
        let progress = ParallelProgress::new("enrich", "Enriching records", total, 1_000);

        let results: Vec<(String, Result<Enriched, RecordError>)> = records
            .into_par_iter()
            .map(|record| {
                let uid = record.uid().to_string();
                let entry = if record.email().is_empty() {
                    None
                } else {
                    mailing_list.get(record.email())
                };
                let result = self.enrich(record, entry);
                progress.tick();
                (uid, result)
            })
            .collect();

        let mut report = EnrichmentReport::default();
        let mut stats = EnrichStats::default();
        for (uid, result) in results {
            match result {
                Ok(enriched) => {
                    stats.merge(&enriched.stats());
                    if !enriched.changes.is_empty() {
                        report.updates.push(RecordUpdate {
                            uid,
                            changes: enriched.changes,
                        });
                    }
                    report.records.push(enriched.record);
                }
                Err(err) => {
                    warn!(uid = %uid, reason = %err, "record excluded from write-back");
                    stats.total_records += 1;
                    stats.failures += 1;
                    report.failures.push(RecordFailure {
                        uid,
                        reason: err.to_string(),
                    });
                }
            }
        }

        stats.elapsed_seconds = start.elapsed().as_secs_f64();
        progress.finish(format!(
            "Enriched {} records ({} changed, {} failed)",
            stats.total_records, stats.records_changed, stats.failures
        ));
        (report, stats)
    }
}

// ============================================================================
// TESTS
// ============================================================================
