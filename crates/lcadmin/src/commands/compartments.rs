//! Emission compartment command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, EmissionCompartment, EmissionCompartmentInput};

use crate::cli::{CompartmentsArgs, CompartmentsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CompartmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&EmissionCompartment> for CompartmentRow {
    fn from(c: &EmissionCompartment) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            description: util::dash(c.description.as_deref()),
        }
    }
}

fn detail(c: &EmissionCompartment) -> String {
    let mut lines = vec![format!("ID:    {}", c.id), format!("Name:  {}", c.name)];
    if let Some(desc) = &c.description {
        lines.push(format!("About: {desc}"));
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: CompartmentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CompartmentsCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.emission_compartments(&q).await
                })
                .await?
            } else {
                catalog.emission_compartments(&query).await?
            };
            let out = output::render_page(&global.output, &page, |r| CompartmentRow::from(r), |c| {
                c.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CompartmentsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let compartment = catalog.emission_compartment(id).await?;
            let out =
                output::render_single(&global.output, &compartment, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CompartmentsCommand::Create { name, description } => {
            let created = catalog
                .create_emission_compartment(&EmissionCompartmentInput { name, description })
                .await?;
            output::print_success(
                &format!("Created emission compartment '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        CompartmentsCommand::Update {
            id,
            name,
            description,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.emission_compartment(id).await?;
            let input = EmissionCompartmentInput {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
            };
            let updated = catalog.update_emission_compartment(id, &input).await?;
            output::print_success(
                &format!("Updated emission compartment '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CompartmentsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(
                &format!("Delete emission compartment {id}? Categories lose the reference."),
                global.yes,
            )? {
                return Ok(());
            }
            catalog.delete_emission_compartment(parsed).await?;
            output::print_success("Emission compartment deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
