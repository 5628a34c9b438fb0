//! Per-OS device association core.
//!
//! An operating system entity keeps track of which hardware devices it
//! supports, optionally scoped to a platform (a hypervisor or firmware
//! target). This crate models that state as an [`OsDeviceRegistry`]:
//! a keyed multimap of insertion-ordered device links with filtered,
//! first-match-wins retrieval.
//!
//! Catalog entities ([`Device`], [`Platform`]) are long-lived objects owned
//! by the caller; the registry only holds shared references to devices and
//! exclusive ownership of the [`DeviceLink`] records it creates.

pub mod core;

pub use crate::core::entity::{Device, Entity, Platform};
pub use crate::core::filter::Filter;
pub use crate::core::link::{DeviceLink, PROP_DRIVER};
pub use crate::core::registry::{OsDeviceRegistry, RegistryError};
pub use crate::core::types::LinkId;
