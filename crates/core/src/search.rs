//! Filter parameters for item search.

use crate::types::DbId;

/// Conjunctive search filters for items. A `None` field imposes no
/// constraint.
///
/// `category_id`, `indispensable`, and `name` translate directly to SQL
/// predicates. `location_id` is applied after the link sets have been
/// materialized, since the relation is resolved into id lists anyway for the
/// read model.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub category_id: Option<DbId>,
    /// Matches items whose location-link set contains this id.
    pub location_id: Option<DbId>,
    pub indispensable: Option<bool>,
    /// Case-insensitive substring match against the item name.
    pub name: Option<String>,
}

impl ItemFilter {
    /// Post-filter over an item's materialized location-link set.
    pub fn matches_location(&self, location_ids: &[DbId]) -> bool {
        match self.location_id {
            Some(id) => location_ids.contains(&id),
            None => true,
        }
    }
}
