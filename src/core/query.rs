// filtered, ordered retrieval over one registry
//
// Scope selection rule shared by every query: an explicit platform selects
// its own bucket or, if that platform was never added to, an empty scope.
// It never falls back to the global list. No platform selects the global
// list.
use std::sync::Arc;

use log::debug;

use crate::core::entity::{Device, Entity, Platform};
use crate::core::filter::Filter;
use crate::core::link::DeviceLink;
use crate::core::registry::OsDeviceRegistry;
use crate::core::types::LinkId;

impl OsDeviceRegistry {
    fn scope(&self, platform: Option<&Platform>) -> &[LinkId] {
        match platform {
            Some(p) => match self.platforms.get(p.id()) {
                Some(ids) => ids,
                None => {
                    debug!("no links under platform {}", p.id());
                    &[]
                }
            },
            None => &self.global_links,
        }
    }

    //ids held by a scope list always exist in the store
    fn stored(&self, id: LinkId) -> &DeviceLink {
        &self.links[&id]
    }

    /// First link, in insertion order, whose **device** passes the filter.
    ///
    /// With no filter this is simply the earliest link in scope. Returns
    /// `None` when the scope is empty or nothing matches; absence is a
    /// normal outcome, not an error.
    pub fn preferred_device_link(
        &self,
        platform: Option<&Platform>,
        filter: Option<&dyn Filter>,
    ) -> Option<&DeviceLink> {
        for &id in self.scope(platform) {
            let link = self.stored(id);
            if filter.is_none_or(|f| f.matches(link.device().as_ref())) {
                return Some(link);
            }
        }
        None
    }

    /// Device of the preferred link, if any.
    pub fn preferred_device(
        &self,
        platform: Option<&Platform>,
        filter: Option<&dyn Filter>,
    ) -> Option<&Arc<Device>> {
        self.preferred_device_link(platform, filter).map(DeviceLink::device)
    }

    /// Every link in scope whose **link** attributes pass the filter, in
    /// insertion order.
    ///
    /// Note the subject: the filter sees the link entity (driver metadata
    /// and the like), not the device behind it. [`devices`] and
    /// [`preferred_device_link`] filter on the device instead.
    ///
    /// [`devices`]: Self::devices
    /// [`preferred_device_link`]: Self::preferred_device_link
    pub fn device_links(
        &self,
        platform: Option<&Platform>,
        filter: Option<&dyn Filter>,
    ) -> Vec<&DeviceLink> {
        let mut out = Vec::new();
        for &id in self.scope(platform) {
            let link = self.stored(id);
            if filter.is_none_or(|f| f.matches(link)) {
                out.push(link);
            }
        }
        out
    }

    /// Every device in scope whose **device** attributes pass the filter,
    /// in insertion order. A device linked more than once appears more than
    /// once.
    pub fn devices(
        &self,
        platform: Option<&Platform>,
        filter: Option<&dyn Filter>,
    ) -> Vec<Arc<Device>> {
        let mut out = Vec::new();
        for &id in self.scope(platform) {
            let link = self.stored(id);
            if filter.is_none_or(|f| f.matches(link.device().as_ref())) {
                out.push(Arc::clone(link.device()));
            }
        }
        out
    }
}
