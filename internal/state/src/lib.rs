//! Snapshot persistence for `follow-audit`.
//!
//! The entire collection of named snapshots lives in one state file as a
//! single serialised blob behind a version byte. There is no cache: every
//! operation reads the collection fresh from disk, and saves re-write the
//! whole thing. That makes concurrent writers a lost-update hazard, which
//! is accepted for a single-user local tool.
//!
//! A missing file, an unknown version byte, or a blob that fails to
//! deserialise all behave as an empty collection. Snapshot data is never
//! worth refusing to start over; corruption is logged and forgotten.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use ig_export::Username;
use serde::{Deserialize, Serialize};
use tokio::fs;

mod error;
pub use self::error::Error;

const VERSION: u8 = 1;

/// A named, point-in-time capture of both relationship lists. Immutable
/// once saved; saving the same name again replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    pub followers: Vec<Username>,
    pub following: Vec<Username>,
}

type Collection = BTreeMap<String, Snapshot>;

/// On-disk wrapper. `bincode` requires that data types match exactly for
/// deserialisation, so the version byte travels with the payload and gates
/// which shape we attempt to decode.
#[derive(Deserialize, Serialize)]
struct Ser {
    version: u8,
    snapshots: Collection,
}

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the given state file. The file is not
    /// touched until the first operation.
    pub fn new<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the names of all saved snapshots, in the collection's key
    /// order. Callers must not rely on any ordering beyond "stable for an
    /// unchanged collection".
    pub async fn names(&self) -> Result<Vec<String>, Error> {
        Ok(self.read_collection().await?.keys().cloned().collect())
    }

    /// Saves a snapshot under `name`, replacing any previous snapshot of
    /// that name. An empty name is a no-op: it means the user cancelled
    /// out of naming the snapshot, not an error.
    pub async fn save(
        &self,
        name: &str,
        followers: Vec<Username>,
        following: Vec<Username>,
    ) -> Result<(), Error> {
        if name.is_empty() {
            return Ok(());
        }

        let mut snapshots = self.read_collection().await?;
        snapshots.insert(
            name.to_string(),
            Snapshot {
                followers,
                following,
            },
        );

        self.write_collection(snapshots).await
    }

    /// Looks up a snapshot by name. Absence is `Ok(None)`, not an error:
    /// the caller decides whether to warn the user.
    pub async fn load(&self, name: &str) -> Result<Option<Snapshot>, Error> {
        Ok(self.read_collection().await?.remove(name))
    }

    async fn read_collection(&self) -> Result<Collection, Error> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Collection::new()),
            Err(e) => return Err(e.into()),
        };

        match bincode::deserialize::<Ser>(&bytes) {
            Ok(ser) if ser.version == VERSION => Ok(ser.snapshots),
            Ok(ser) => {
                log::warn!(
                    "state file {} has unknown version {}; treating as empty",
                    self.path.display(),
                    ser.version
                );
                Ok(Collection::new())
            }
            Err(e) => {
                log::warn!(
                    "state file {} failed to deserialise ({}); treating as empty",
                    self.path.display(),
                    e
                );
                Ok(Collection::new())
            }
        }
    }

    async fn write_collection(&self, snapshots: Collection) -> Result<(), Error> {
        let bytes = bincode::serialize(&Ser {
            version: VERSION,
            snapshots,
        })?;

        fs::write(&self.path, bytes).await?;
        log::trace!("state persisted to {}", self.path.display());

        Ok(())
    }
}
