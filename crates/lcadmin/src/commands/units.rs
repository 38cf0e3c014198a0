//! Unit command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, Scope, Unit, UnitInput};

use crate::cli::{GlobalOpts, UnitsArgs, UnitsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Group")]
    group: String,
}

impl From<&Unit> for UnitRow {
    fn from(u: &Unit) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            factor: u.conversion_factor.to_string(),
            default: if u.is_default { "yes" } else { "" }.into(),
            group: match &u.unit_group {
                Some(g) => g.name.clone(),
                None => "-".into(),
            },
        }
    }
}

fn detail(u: &Unit) -> String {
    let mut lines = vec![
        format!("ID:       {}", u.id),
        format!("Name:     {}", u.name),
        format!("Factor:   {}", u.conversion_factor),
        format!("Default:  {}", if u.is_default { "yes" } else { "no" }),
    ];
    match &u.unit_group {
        Some(g) => lines.push(format!("Group:    {} ({})", g.name, g.id)),
        None => lines.push("Group:    -".into()),
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: UnitsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UnitsCommand::List { list, group } => {
            let mut query = util::list_query(&list)?;
            if let Some(id) = util::parse_scope_id(group.as_deref(), "group")? {
                query.set_scope(Scope::UnitGroup(id));
            }

            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.units(&q).await
                })
                .await?
            } else {
                catalog.units(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| UnitRow::from(r), |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UnitsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let unit = catalog.unit(id).await?;
            let out = output::render_single(&global.output, &unit, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UnitsCommand::Create {
            name,
            factor,
            default,
            group,
        } => {
            let input = UnitInput {
                name,
                conversion_factor: factor,
                is_default: default,
                unit_group_id: group
                    .as_deref()
                    .map(|g| util::parse_id(g, "group"))
                    .transpose()?,
            };
            let created = catalog.create_unit(&input).await?;
            output::print_success(
                &format!("Created unit '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        UnitsCommand::Update {
            id,
            name,
            factor,
            default,
            group,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.unit(id).await?;
            let input = UnitInput {
                name: name.unwrap_or(current.name),
                conversion_factor: factor.unwrap_or(current.conversion_factor),
                is_default: default.unwrap_or(current.is_default),
                unit_group_id: match group.as_deref() {
                    Some(g) => Some(util::parse_id(g, "group")?),
                    None => current.unit_group.map(|g| g.id),
                },
            };
            let updated = catalog.update_unit(id, &input).await?;
            output::print_success(
                &format!("Updated unit '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        UnitsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(&format!("Delete unit {id}?"), global.yes)? {
                return Ok(());
            }
            catalog.delete_unit(parsed).await?;
            output::print_success("Unit deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
