use strum::{Display, EnumIter, IntoStaticStr};

/// The catalog's reference entity kinds.
///
/// Used as cache-key component, dashboard ordering, and screen/command
/// naming. Iteration order is the order entities appear in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum EntityKind {
    ImpactMethod,
    ImpactCategory,
    MidpointCategory,
    Unit,
    UnitGroup,
    Organization,
    IndustryCode,
    EmissionCompartment,
    User,
}

impl EntityKind {
    /// Human-facing plural label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ImpactMethod => "Impact methods",
            Self::ImpactCategory => "Impact categories",
            Self::MidpointCategory => "Midpoint categories",
            Self::Unit => "Units",
            Self::UnitGroup => "Unit groups",
            Self::Organization => "Organizations",
            Self::IndustryCode => "Industry codes",
            Self::EmissionCompartment => "Emission compartments",
            Self::User => "Users",
        }
    }

    /// Singular noun for messages ("impact method 'x' not found").
    pub fn noun(self) -> &'static str {
        match self {
            Self::ImpactMethod => "impact method",
            Self::ImpactCategory => "impact category",
            Self::MidpointCategory => "midpoint category",
            Self::Unit => "unit",
            Self::UnitGroup => "unit group",
            Self::Organization => "organization",
            Self::IndustryCode => "industry code",
            Self::EmissionCompartment => "emission compartment",
            Self::User => "user",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kebab_case_names() {
        assert_eq!(EntityKind::ImpactMethod.to_string(), "impact-method");
        assert_eq!(EntityKind::UnitGroup.to_string(), "unit-group");
    }

    #[test]
    fn every_kind_has_labels() {
        for kind in EntityKind::iter() {
            assert!(!kind.label().is_empty());
            assert!(!kind.noun().is_empty());
        }
    }
}
