//! Screen registry.

pub mod browse;
pub mod dashboard;

use crate::component::Component;
use crate::screen::ScreenId;

/// Build all screens in tab order: the dashboard plus one browse
/// screen per entity.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    ScreenId::ALL
        .into_iter()
        .map(|id| {
            let component: Box<dyn Component> = match id.entity() {
                None => Box::new(dashboard::DashboardScreen::new()),
                Some(entity) => Box::new(browse::BrowseScreen::new(entity)),
            };
            (id, component)
        })
        .collect()
}
