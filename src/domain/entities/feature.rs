//! Feature entity: a displayable attribute attached to a user.

/// An icon and caption shown for a user, e.g. "insurance" or "investments".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub id: i64,
    pub icon: String,
    pub description: String,
}

impl Feature {
    pub fn new(id: i64, icon: String, description: String) -> Self {
        Self {
            id,
            icon,
            description,
        }
    }
}

/// Input data for a feature written together with its owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeature {
    pub icon: String,
    pub description: String,
}

impl From<Feature> for NewFeature {
    fn from(feature: Feature) -> Self {
        Self {
            icon: feature.icon,
            description: feature.description,
        }
    }
}
