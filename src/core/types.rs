// shared ids and aliases
use std::collections::BTreeMap;

/// Handle for a device link owned by a registry. Ids are dense, assigned in
/// creation order, and never reused within one registry.
pub type LinkId = u32;

/// Ordered property bag carried by catalog entities.
pub type ParamMap = BTreeMap<String, String>;
