//! Midpoint category command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, MidpointCategory, MidpointCategoryInput};

use crate::cli::{GlobalOpts, MidpointsArgs, MidpointsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct MidpointRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Abbr")]
    abbr: String,
}

impl From<&MidpointCategory> for MidpointRow {
    fn from(m: &MidpointCategory) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            abbr: util::dash(m.abbr.as_deref()),
        }
    }
}

fn detail(m: &MidpointCategory) -> String {
    let mut lines = vec![
        format!("ID:           {}", m.id),
        format!("Name:         {}", m.name),
        format!("Abbr:         {}", util::dash(m.abbr.as_deref())),
    ];
    if let Some(desc) = &m.description {
        lines.push(format!("Description:  {desc}"));
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: MidpointsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MidpointsCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.midpoint_categories(&q).await
                })
                .await?
            } else {
                catalog.midpoint_categories(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| MidpointRow::from(r), |m| m.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MidpointsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let midpoint = catalog.midpoint_category(id).await?;
            let out =
                output::render_single(&global.output, &midpoint, detail, |m| m.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MidpointsCommand::Create {
            name,
            abbr,
            description,
        } => {
            let input = MidpointCategoryInput {
                name,
                abbr,
                description,
            };
            let created = catalog.create_midpoint_category(&input).await?;
            output::print_success(
                &format!("Created midpoint category '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        MidpointsCommand::Update {
            id,
            name,
            abbr,
            description,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.midpoint_category(id).await?;
            let input = MidpointCategoryInput {
                name: name.unwrap_or(current.name),
                abbr: abbr.or(current.abbr),
                description: description.or(current.description),
            };
            let updated = catalog.update_midpoint_category(id, &input).await?;
            output::print_success(
                &format!("Updated midpoint category '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        MidpointsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(&format!("Delete midpoint category {id}?"), global.yes)? {
                return Ok(());
            }
            catalog.delete_midpoint_category(parsed).await?;
            output::print_success("Midpoint category deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
