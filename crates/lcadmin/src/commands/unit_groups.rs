//! Unit group command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, UnitGroup, UnitGroupInput};

use crate::cli::{GlobalOpts, UnitGroupsArgs, UnitGroupsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&UnitGroup> for GroupRow {
    fn from(g: &UnitGroup) -> Self {
        Self {
            id: g.id.to_string(),
            name: g.name.clone(),
        }
    }
}

fn detail(g: &UnitGroup) -> String {
    format!("ID:    {}\nName:  {}", g.id, g.name)
}

pub async fn handle(
    catalog: &Catalog,
    args: UnitGroupsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UnitGroupsCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.unit_groups(&q).await
                })
                .await?
            } else {
                catalog.unit_groups(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| GroupRow::from(r), |g| g.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UnitGroupsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let group = catalog.unit_group(id).await?;
            let out = output::render_single(&global.output, &group, detail, |g| g.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UnitGroupsCommand::Create { name } => {
            let created = catalog.create_unit_group(&UnitGroupInput { name }).await?;
            output::print_success(
                &format!("Created unit group '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        UnitGroupsCommand::Update { id, name } => {
            let parsed = util::parse_id(&id, "id")?;
            let updated = catalog
                .update_unit_group(parsed, &UnitGroupInput { name })
                .await?;
            output::print_success(
                &format!("Updated unit group '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        UnitGroupsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(
                &format!("Delete unit group {id}? Its units keep existing unscoped."),
                global.yes,
            )? {
                return Ok(());
            }
            catalog.delete_unit_group(parsed).await?;
            output::print_success("Unit group deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
