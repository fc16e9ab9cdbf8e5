use thiserror::Error;

use crate::ingest::Role;

#[derive(Error, Debug)]
pub enum Error {
    /// A required role file was never seen, or parsed down to nothing.
    /// Either way the ingestion cannot produce a meaningful difference, so
    /// nothing is updated.
    #[error("missing or unparsable {0} file")]
    MissingExport(Role),

    #[error("no snapshot named {0:?} exists")]
    SnapshotNotFound(String),

    #[error(transparent)]
    State(#[from] follow_audit_state::Error),
}
