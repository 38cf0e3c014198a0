//! Command handler modules, one per entity family.

pub mod categories;
pub mod compartments;
pub mod config_cmd;
pub mod dashboard;
pub mod factors;
pub mod industry_codes;
pub mod methods;
pub mod midpoints;
pub mod organizations;
pub mod session;
pub mod unit_groups;
pub mod units;
pub mod users;
pub mod util;

use lcadmin_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(
    cmd: Command,
    catalog: &Catalog,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Methods(args) => methods::handle(catalog, args, global).await,
        Command::Categories(args) => categories::handle(catalog, args, global).await,
        Command::Midpoints(args) => midpoints::handle(catalog, args, global).await,
        Command::Units(args) => units::handle(catalog, args, global).await,
        Command::UnitGroups(args) => unit_groups::handle(catalog, args, global).await,
        Command::Organizations(args) => organizations::handle(catalog, args, global).await,
        Command::IndustryCodes(args) => industry_codes::handle(catalog, args, global).await,
        Command::Compartments(args) => compartments::handle(catalog, args, global).await,
        Command::Users(args) => users::handle(catalog, args, global).await,
        Command::Factors(args) => factors::handle(catalog, args, global).await,
        Command::Dashboard => dashboard::handle(catalog, global).await,
        Command::Login { username } => session::login(catalog, username, global).await,
        Command::Logout => session::logout(catalog, global).await,

        // Handled before a catalog is built.
        Command::Config(_) | Command::Completions(_) => unreachable!("handled in main"),
    }
}
