//! Screen identifier enum.

use std::fmt;

use lcadmin_core::EntityKind;

/// Identifies each TUI screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Dashboard, // 1
    Methods,      // 2
    Categories,   // 3
    Midpoints,    // 4
    Units,        // 5
    UnitGroups,   // 6
    Organizations, // 7
    IndustryCodes, // 8
    Compartments, // 9
    Users,        // 0
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 10] = [
        Self::Dashboard,
        Self::Methods,
        Self::Categories,
        Self::Midpoints,
        Self::Units,
        Self::UnitGroups,
        Self::Organizations,
        Self::IndustryCodes,
        Self::Compartments,
        Self::Users,
    ];

    /// Numeric key for this screen (0 stands in for 10).
    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Methods => 2,
            Self::Categories => 3,
            Self::Midpoints => 4,
            Self::Units => 5,
            Self::UnitGroups => 6,
            Self::Organizations => 7,
            Self::IndustryCodes => 8,
            Self::Compartments => 9,
            Self::Users => 0,
        }
    }

    /// Screen from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Methods),
            3 => Some(Self::Categories),
            4 => Some(Self::Midpoints),
            5 => Some(Self::Units),
            6 => Some(Self::UnitGroups),
            7 => Some(Self::Organizations),
            8 => Some(Self::IndustryCodes),
            9 => Some(Self::Compartments),
            0 => Some(Self::Users),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The entity this screen browses, if any.
    pub fn entity(self) -> Option<EntityKind> {
        match self {
            Self::Dashboard => None,
            Self::Methods => Some(EntityKind::ImpactMethod),
            Self::Categories => Some(EntityKind::ImpactCategory),
            Self::Midpoints => Some(EntityKind::MidpointCategory),
            Self::Units => Some(EntityKind::Unit),
            Self::UnitGroups => Some(EntityKind::UnitGroup),
            Self::Organizations => Some(EntityKind::Organization),
            Self::IndustryCodes => Some(EntityKind::IndustryCode),
            Self::Compartments => Some(EntityKind::EmissionCompartment),
            Self::Users => Some(EntityKind::User),
        }
    }

    /// Screen owning an entity's browse views.
    pub fn for_entity(entity: EntityKind) -> Self {
        match entity {
            EntityKind::ImpactMethod => Self::Methods,
            EntityKind::ImpactCategory => Self::Categories,
            EntityKind::MidpointCategory => Self::Midpoints,
            EntityKind::Unit => Self::Units,
            EntityKind::UnitGroup => Self::UnitGroups,
            EntityKind::Organization => Self::Organizations,
            EntityKind::IndustryCode => Self::IndustryCodes,
            EntityKind::EmissionCompartment => Self::Compartments,
            EntityKind::User => Self::Users,
        }
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dash",
            Self::Methods => "Methods",
            Self::Categories => "Categories",
            Self::Midpoints => "Midpoints",
            Self::Units => "Units",
            Self::UnitGroups => "Groups",
            Self::Organizations => "Orgs",
            Self::IndustryCodes => "ISIC",
            Self::Compartments => "Compartments",
            Self::Users => "Users",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps() {
        assert_eq!(ScreenId::Users.next(), ScreenId::Dashboard);
        assert_eq!(ScreenId::Dashboard.prev(), ScreenId::Users);
    }

    #[test]
    fn every_entity_screen_round_trips() {
        for id in ScreenId::ALL {
            if let Some(entity) = id.entity() {
                assert_eq!(ScreenId::for_entity(entity), id);
            }
        }
    }

    #[test]
    fn number_keys_cover_all_screens() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
    }
}
