// per-OS device association state: link store + platform index + global order
use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use thiserror::Error;

use crate::core::entity::{Device, Entity, Platform};
use crate::core::link::DeviceLink;
use crate::core::types::LinkId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no device link with id {0}")]
    LinkNotFound(LinkId),
    #[error("invalid argument: {what}")]
    InvalidArgument { what: &'static str },
}

/// Device-association state of one operating system entity.
///
/// Links live in a single store keyed by [`LinkId`]; per-scope insertion
/// order is kept separately, as one id list per platform key plus one list
/// for unscoped ("global") associations. Dropping the registry drops every
/// link and both index structures; devices themselves are shared with the
/// caller's catalog and survive independently.
///
/// No internal locking: `&mut self` for mutation, `&self` for queries.
/// Callers needing concurrent access serialize externally.
#[derive(Debug, Default)]
pub struct OsDeviceRegistry {
    //all links ever added; ids are dense and never reused
    pub(crate) links: HashMap<LinkId, DeviceLink>,
    //platform id -> insertion-ordered link ids. A key is present iff at
    //least one link was added under it, so no bucket is ever empty.
    pub(crate) platforms: HashMap<String, Vec<LinkId>>,
    //insertion-ordered ids of links added with no platform scope
    pub(crate) global_links: Vec<LinkId>,
    next_link_id: LinkId,
}

impl OsDeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a device with this OS, optionally scoped to a platform.
    ///
    /// Duplicates are allowed: adding the same device twice creates two
    /// distinct links (e.g. the same NIC under two different drivers).
    /// Returns the id of the created link so the caller can annotate it
    /// afterwards, e.g. via [`set_link_driver`].
    ///
    /// [`set_link_driver`]: Self::set_link_driver
    pub fn add_device(
        &mut self,
        platform: Option<&Platform>,
        device: &Arc<Device>,
    ) -> Result<LinkId, RegistryError> {
        //validate before mutating anything
        if device.id().is_empty() {
            return Err(RegistryError::InvalidArgument {
                what: "device id must not be empty",
            });
        }
        if platform.is_some_and(|p| p.id().is_empty()) {
            return Err(RegistryError::InvalidArgument {
                what: "platform id must not be empty",
            });
        }

        let id = self.next_link_id;
        self.next_link_id += 1;
        self.links.insert(id, DeviceLink::new(Arc::clone(device)));

        match platform {
            //bucket and key come into existence together on first insert
            Some(p) => self.platforms.entry(p.id().to_string()).or_default().push(id),
            None => self.global_links.push(id),
        }

        trace!(
            "link {}: device {} (platform {:?})",
            id,
            device.id(),
            platform.map(|p| p.id())
        );
        Ok(id)
    }

    pub fn link(&self, id: LinkId) -> Result<&DeviceLink, RegistryError> {
        self.links.get(&id).ok_or(RegistryError::LinkNotFound(id))
    }

    pub fn link_mut(&mut self, id: LinkId) -> Result<&mut DeviceLink, RegistryError> {
        self.links.get_mut(&id).ok_or(RegistryError::LinkNotFound(id))
    }

    /// Record a driver name against an existing link.
    pub fn set_link_driver(&mut self, id: LinkId, driver: &str) -> Result<(), RegistryError> {
        self.link_mut(id)?.set_driver(driver);
        Ok(())
    }

    /// Total number of links, across every scope.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Platform ids that currently have at least one link.
    pub fn platform_keys(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    pub fn platform_link_count(&self, platform: &Platform) -> usize {
        self.platforms.get(platform.id()).map_or(0, Vec::len)
    }
}
