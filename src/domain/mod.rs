mod fingerprint;
mod listing;
mod reconcile;

pub use fingerprint::{assign_fingerprints, fingerprint_of};
pub use listing::{date_stamp, Listing, RootEntry};
pub use reconcile::{reconcile, ReconcileEvent, ReconcileSummary};
