// opaque predicate over entity attributes
use crate::core::entity::Entity;

/// Boolean predicate the registry evaluates against an entity during a
/// query. The registry never looks inside it; matching logic belongs to the
/// caller.
///
/// Query operations pick the subject deliberately: device-returning lookups
/// evaluate the filter against each link's device, while link-returning
/// lookups evaluate it against the link itself (so link metadata such as the
/// driver name is matchable).
pub trait Filter {
    fn matches(&self, entity: &dyn Entity) -> bool;
}

//closures double as filters, which keeps call sites and tests short
impl<F> Filter for F
where
    F: Fn(&dyn Entity) -> bool,
{
    fn matches(&self, entity: &dyn Entity) -> bool {
        self(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Device;

    #[test]
    fn closure_filter_matches_on_params() {
        let dev = Device::new("d").with_param("class", "net");
        let is_net = |e: &dyn Entity| e.param_value("class") == Some("net");

        assert!(is_net.matches(&dev));

        let is_block = |e: &dyn Entity| e.param_value("class") == Some("block");
        assert!(!is_block.matches(&dev));
    }
}
