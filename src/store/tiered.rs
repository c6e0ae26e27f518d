//! Two-tier store: an authoritative remote tier (only present when signed in) mirrored
//! into an always-available local tier.

use super::{CustomBracketStore, StoreError};
use crate::models::CustomBracketDefinition;
use std::collections::BTreeSet;

pub struct TieredStore<R, L> {
    remote: Option<R>,
    local: L,
    /// Ids saved locally while the remote was failing, not yet pushed to it.
    unsynced: BTreeSet<String>,
}

impl<R: CustomBracketStore, L: CustomBracketStore> TieredStore<R, L> {
    pub fn new(remote: Option<R>, local: L) -> Self {
        Self {
            remote,
            local,
            unsynced: BTreeSet::new(),
        }
    }

    /// Local tier only (no signed-in user).
    pub fn local_only(local: L) -> Self {
        Self::new(None, local)
    }

    /// Resume with ids left unsynced by an earlier store over the same local tier.
    pub fn with_unsynced(mut self, unsynced: BTreeSet<String>) -> Self {
        self.unsynced = unsynced;
        self
    }

    pub fn unsynced(&self) -> &BTreeSet<String> {
        &self.unsynced
    }

    /// Hand the unsynced ids back so a later store can resume them.
    pub fn take_unsynced(&mut self) -> BTreeSet<String> {
        std::mem::take(&mut self.unsynced)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn into_parts(self) -> (Option<R>, L) {
        (self.remote, self.local)
    }

    /// Push locally saved brackets to the remote; ids the remote still refuses stay unsynced.
    fn push_unsynced(&mut self) {
        if self.unsynced.is_empty() {
            return;
        }
        let remote = match self.remote.as_mut() {
            Some(remote) => remote,
            None => return,
        };
        let local = match self.local.list() {
            Ok(local) => local,
            Err(e) => {
                log::warn!("Could not read local brackets to sync: {}", e);
                return;
            }
        };
        self.unsynced.retain(|id| match local.iter().find(|d| &d.id == id) {
            None => false,
            Some(definition) => match remote.upsert(definition.clone()) {
                Ok(()) => {
                    log::info!("Synced locally saved bracket {} to the remote store", id);
                    false
                }
                Err(e) => {
                    log::warn!("Bracket {} still only saved locally: {}", id, e);
                    true
                }
            },
        });
    }

    /// Mirror the authoritative list into the local tier. Unsynced local entries are kept.
    fn mirror(&mut self, definitions: &[CustomBracketDefinition]) -> Result<(), StoreError> {
        for stale in self.local.list()? {
            if !definitions.iter().any(|d| d.id == stale.id) && !self.unsynced.contains(&stale.id) {
                log::debug!("Dropping local bracket {} (gone from the remote store)", stale.id);
                self.local.delete(&stale.id)?;
            }
        }
        for definition in definitions {
            self.local.upsert(definition.clone())?;
        }
        Ok(())
    }

    /// Remote list when available (after pushing unsynced local saves), mirrored locally;
    /// otherwise the local snapshot.
    pub fn refresh(&mut self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        self.push_unsynced();
        let remote = match &self.remote {
            Some(remote) => remote.list(),
            None => return self.local.list(),
        };
        match remote {
            Ok(mut definitions) => {
                if let Err(e) = self.mirror(&definitions) {
                    log::warn!("Could not mirror custom brackets locally: {}", e);
                }
                if !self.unsynced.is_empty() {
                    let pending: Vec<CustomBracketDefinition> = self
                        .local
                        .list()?
                        .into_iter()
                        .filter(|d| self.unsynced.contains(&d.id) && !definitions.iter().any(|r| r.id == d.id))
                        .collect();
                    definitions.extend(pending);
                }
                Ok(definitions)
            }
            Err(e) => {
                log::warn!("Remote bracket list failed, using local copy: {}", e);
                self.local.list()
            }
        }
    }
}

impl<R: CustomBracketStore, L: CustomBracketStore> CustomBracketStore for TieredStore<R, L> {
    /// Read-only view: remote when it answers, else local. Use `refresh` to also mirror.
    fn list(&self) -> Result<Vec<CustomBracketDefinition>, StoreError> {
        match &self.remote {
            Some(remote) => remote.list().or_else(|e| {
                log::warn!("Remote bracket list failed, using local copy: {}", e);
                self.local.list()
            }),
            None => self.local.list(),
        }
    }

    fn upsert(&mut self, definition: CustomBracketDefinition) -> Result<(), StoreError> {
        if let Some(remote) = self.remote.as_mut() {
            match remote.upsert(definition.clone()) {
                Ok(()) => {
                    self.unsynced.remove(&definition.id);
                    if let Err(e) = self.local.upsert(definition) {
                        log::warn!("Saved remotely but local mirror failed: {}", e);
                    }
                    return Ok(());
                }
                Err(e) => log::warn!("Remote save failed, saving locally: {}", e),
            }
            let id = definition.id.clone();
            self.local.upsert(definition)?;
            self.unsynced.insert(id);
            return Ok(());
        }
        self.local.upsert(definition)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.unsynced.remove(id);
        if let Some(remote) = self.remote.as_mut() {
            match remote.delete(id) {
                Ok(()) => {
                    match self.local.delete(id) {
                        Ok(()) | Err(StoreError::NotFound(_)) => {}
                        Err(e) => log::warn!("Deleted remotely but local mirror failed: {}", e),
                    }
                    return Ok(());
                }
                Err(StoreError::NotFound(_)) => {}
                Err(e) => log::warn!("Remote delete failed, deleting locally: {}", e),
            }
        }
        self.local.delete(id)
    }
}
