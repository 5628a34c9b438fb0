// device link: one shared device target + caller-annotated driver metadata
use std::sync::Arc;

use crate::core::entity::{Device, Entity};

/// Well-known property name under which a link exposes its driver to
/// link-subject filters.
pub const PROP_DRIVER: &str = "driver";

/// An association between an operating system and one device.
///
/// The link never owns its device (the catalog does); it owns only the
/// metadata recorded against the association. Created by
/// [`OsDeviceRegistry::add_device`] and owned exclusively by the registry
/// that created it.
///
/// [`OsDeviceRegistry::add_device`]: crate::core::registry::OsDeviceRegistry::add_device
#[derive(Debug, Clone)]
pub struct DeviceLink {
    device: Arc<Device>,
    driver: Option<String>,
}

impl DeviceLink {
    pub(crate) fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            driver: None,
        }
    }

    /// The device this link targets.
    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }

    pub fn set_driver(&mut self, driver: impl Into<String>) {
        self.driver = Some(driver.into());
    }
}

impl Entity for DeviceLink {
    //a link is identified by the device it targets
    fn id(&self) -> &str {
        self.device.id()
    }

    fn param_value(&self, key: &str) -> Option<&str> {
        if key == PROP_DRIVER {
            self.driver()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_exposes_driver_as_entity_param() {
        let dev = Arc::new(Device::new("d"));
        let mut link = DeviceLink::new(Arc::clone(&dev));

        assert_eq!(link.driver(), None);
        assert_eq!(link.param_value(PROP_DRIVER), None);

        link.set_driver("virtio-net");
        assert_eq!(link.driver(), Some("virtio-net"));
        assert_eq!(link.param_value(PROP_DRIVER), Some("virtio-net"));

        //device attributes are not visible through the link
        assert_eq!(link.param_value("class"), None);
    }

    #[test]
    fn link_id_is_the_target_device_id() {
        let dev = Arc::new(Device::new("pci/1af4/1000"));
        let link = DeviceLink::new(Arc::clone(&dev));
        assert_eq!(link.id(), "pci/1af4/1000");
    }
}
