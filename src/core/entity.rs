// minimal entity model the registry consumes: identity + attribute access
use serde::{Deserialize, Serialize};

use crate::core::types::ParamMap;

/// Capability every catalog object exposes to a [`Filter`]: a stable id and
/// read access to named attributes.
///
/// [`Filter`]: crate::core::filter::Filter
pub trait Entity {
    fn id(&self) -> &str;

    /// Value of a named attribute, or `None` if the entity does not carry it.
    fn param_value(&self, key: &str) -> Option<&str>;
}

/// A hardware component. Owned by the caller's catalog; registries hold it
/// through a shared reference and never control its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    id: String,
    params: ParamMap,
}

impl Device {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: ParamMap::new(),
        }
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    //chainable variant for catalog construction
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_param(key, value);
        self
    }
}

impl Entity for Device {
    fn id(&self) -> &str {
        &self.id
    }

    fn param_value(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// A virtualization or firmware target that device links may be scoped to.
/// The registry only ever reads its id, as the platform-index key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    id: String,
    params: ParamMap,
}

impl Platform {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: ParamMap::new(),
        }
    }

    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }
}

impl Entity for Platform {
    fn id(&self) -> &str {
        &self.id
    }

    fn param_value(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_exposes_id_and_params_through_entity() {
        let dev = Device::new("pci/8086/10d3").with_param("class", "net");

        assert_eq!(dev.id(), "pci/8086/10d3");
        assert_eq!(dev.param_value("class"), Some("net"));
        assert_eq!(dev.param_value("vendor"), None);
    }

    #[test]
    fn set_param_overwrites_existing_value() {
        let mut dev = Device::new("d");
        dev.set_param("class", "net");
        dev.set_param("class", "block");

        assert_eq!(dev.param_value("class"), Some("block"));
    }

    #[test]
    fn platform_id_is_the_index_key() {
        let p = Platform::new("qemu-kvm-9.0");
        assert_eq!(p.id(), "qemu-kvm-9.0");
        assert_eq!(p.param_value("anything"), None);
    }
}
