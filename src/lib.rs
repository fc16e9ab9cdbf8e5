//! Core logic for auditing follower exports: who you follow that doesn't
//! follow you back, and who has unfollowed you since a saved snapshot.
//!
//! The crate is presentation-agnostic. A frontend hands raw export file
//! contents to [`Auditor::ingest`] and renders the returned lists; the
//! remaining operations manage named snapshots of follower state through a
//! [`Store`] injected at construction. Nothing here talks to any social
//! platform: all input is the user's own data export.
//!
//! Failures are recoverable warnings scoped to the operation that raised
//! them: a bad ingestion or an unknown snapshot name leaves all previous
//! state intact, and every operation is safe to re-invoke.

mod error;
mod ingest;

pub use crate::error::Error;
pub use crate::ingest::{ExportFile, Role};
pub use follow_audit_state::{Snapshot, Store};
pub use ig_export::Username;

/// The ingestion orchestrator and public face of the crate.
///
/// Holds the lists from the most recent successful ingestion so that
/// snapshot operations can work against "current" state, the way the user
/// sees it on screen.
#[derive(Debug)]
pub struct Auditor {
    store: Store,
    followers: Vec<Username>,
    following: Vec<Username>,
}

impl Auditor {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            followers: Vec::new(),
            following: Vec::new(),
        }
    }

    /// Ingests one batch of uploaded export files and returns the accounts
    /// the user follows that do not follow back, in following-list order.
    ///
    /// Classification and parse policy live in [`ingest`]: files are
    /// matched to roles by name substring, the last file matching a role
    /// wins, unmatched files are ignored. If either role is missing or
    /// parses to nothing, the ingestion fails and the previously ingested
    /// lists are kept.
    pub fn ingest(&mut self, files: &[ExportFile]) -> Result<Vec<Username>, Error> {
        let (followers, following) = ingest::parse_exports(files)?;

        log::debug!(
            "ingested {} followers, {} following",
            followers.len(),
            following.len()
        );

        self.followers = followers;
        self.following = following;

        Ok(relation_diff::not_following_back(
            &self.following,
            &self.followers,
        ))
    }

    /// Persists the current lists as a named snapshot. An empty name is a
    /// silent no-op (the user cancelled), and an existing snapshot of the
    /// same name is replaced.
    pub async fn save_snapshot(&self, name: &str) -> Result<(), Error> {
        self.store
            .save(name, self.followers.clone(), self.following.clone())
            .await?;

        Ok(())
    }

    /// Returns the names of all saved snapshots.
    pub async fn snapshot_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.store.names().await?)
    }

    /// Diffs a saved snapshot's followers against the current followers,
    /// returning the accounts that have unfollowed since the snapshot was
    /// taken, in snapshot order. An unknown name is an error and changes
    /// nothing.
    pub async fn compare_to_snapshot(&self, name: &str) -> Result<Vec<Username>, Error> {
        let snapshot = match self.store.load(name).await? {
            Some(snapshot) => snapshot,
            None => return Err(Error::SnapshotNotFound(name.to_string())),
        };

        Ok(relation_diff::unfollowed(
            &snapshot.followers,
            &self.followers,
        ))
    }

    /// The follower list from the most recent successful ingestion.
    pub fn followers(&self) -> &[Username] {
        &self.followers
    }

    /// The following list from the most recent successful ingestion.
    pub fn following(&self) -> &[Username] {
        &self.following
    }
}
