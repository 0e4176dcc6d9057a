// src/domain/reconcile.rs

use crate::domain::{Listing, RootEntry};
use crate::ids::IdGenerator;

/// One classified record from a reconciliation pass.
///
/// These are values, not log lines, so callers and tests can assert on the
/// exact classification. The orchestrator turns the anomalous ones into
/// stderr output.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileEvent {
    /// Never seen anywhere: appended to the root with a fresh id.
    New { fingerprint: String, id: String },
    /// Present yesterday and in the root: lastSeenDate bumped.
    Continued { fingerprint: String },
    /// In the root but absent from the previous snapshot. More likely a
    /// fingerprint collision than a genuine re-listing, so the root is left
    /// alone. Warning.
    Reappeared {
        fingerprint: String,
        last_seen: String,
    },
    /// In the previous snapshot but missing from the root. The root is the
    /// source of truth; a snapshotted record that never got promoted points
    /// at an earlier bug. Error.
    MissingFromRoot { fingerprint: String },
}

impl ReconcileEvent {
    /// True for the two paths that leave the root untouched and deserve
    /// operator attention.
    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            ReconcileEvent::Reappeared { .. } | ReconcileEvent::MissingFromRoot { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct ReconcileSummary {
    pub new_listings: usize,
    pub continued: usize,
    pub reappeared: usize,
    pub integrity_violations: usize,
    pub events: Vec<ReconcileEvent>,
}

/// Merge today's fingerprinted records into the root history.
///
/// Every record is classified by fingerprint presence in the previous
/// snapshot and in the root. The root only ever gains entries or has a
/// `last_seen_date` bumped; nothing is pruned. Matching is a linear scan.
///
/// Replay safety: if a previous run persisted the root but died before
/// writing its snapshot, rerunning the same day's input finds the records
/// already in the root and classifies them as reappearances. Noisy, but no
/// duplicates are created.
pub fn reconcile(
    today: &[Listing],
    previous: Option<&[Listing]>,
    root: &mut Vec<RootEntry>,
    today_stamp: &str,
    ids: &mut dyn IdGenerator,
) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();

    for record in today {
        let in_previous = previous
            .map(|snapshot| {
                snapshot
                    .iter()
                    .any(|prev| prev.fingerprint == record.fingerprint)
            })
            .unwrap_or(false);

        let root_index = root
            .iter()
            .position(|entry| entry.listing.fingerprint == record.fingerprint);

        let event = match (in_previous, root_index) {
            // Normal continuation.
            (true, Some(index)) => {
                root[index].last_seen_date = today_stamp.to_string();
                summary.continued += 1;
                ReconcileEvent::Continued {
                    fingerprint: record.fingerprint.clone(),
                }
            }

            // Snapshotted but never promoted to root: integrity violation,
            // record skipped.
            (true, None) => {
                summary.integrity_violations += 1;
                ReconcileEvent::MissingFromRoot {
                    fingerprint: record.fingerprint.clone(),
                }
            }

            // Resurfaced after an absence: suspicious, record skipped.
            (false, Some(index)) => {
                summary.reappeared += 1;
                ReconcileEvent::Reappeared {
                    fingerprint: record.fingerprint.clone(),
                    last_seen: root[index].last_seen_date.clone(),
                }
            }

            // Genuinely new listing.
            (false, None) => {
                let id = ids.next_id();
                root.push(RootEntry {
                    id: id.clone(),
                    first_seen_date: today_stamp.to_string(),
                    last_seen_date: today_stamp.to_string(),
                    listing: record.clone(),
                });
                summary.new_listings += 1;
                ReconcileEvent::New {
                    fingerprint: record.fingerprint.clone(),
                    id,
                }
            }
        };

        summary.events.push(event);
    }

    summary
}
