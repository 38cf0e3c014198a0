//! Impact category command handlers.
//!
//! Listing supports the method/compartment scope filters; `all` (or an
//! absent flag) selects the unscoped endpoint.

use tabled::Tabled;

use lcadmin_core::{Catalog, ImpactCategory, ImpactCategoryInput, Scope};

use crate::cli::{CategoriesArgs, CategoriesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Indicator")]
    indicator: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Compartment")]
    compartment: String,
}

impl From<&ImpactCategory> for CategoryRow {
    fn from(c: &ImpactCategory) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            indicator: c.indicator_name.clone(),
            unit: c
                .unit
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "-".into()),
            // The compartment reference is optional; aggregate
            // categories simply have none.
            compartment: match &c.emission_compartment {
                Some(compartment) => compartment.name.clone(),
                None => "-".into(),
            },
        }
    }
}

fn detail(c: &ImpactCategory) -> String {
    let mut lines = vec![
        format!("ID:           {}", c.id),
        format!("Name:         {}", c.name),
        format!("Indicator:    {}", c.indicator_name),
    ];
    if let Some(desc) = &c.indicator_description {
        lines.push(format!("Description:  {desc}"));
    }
    match &c.unit {
        Some(u) => lines.push(format!("Unit:         {}", u.name)),
        None => lines.push("Unit:         -".into()),
    }
    match &c.midpoint_category {
        Some(m) => lines.push(format!(
            "Midpoint:     {} ({})",
            m.name,
            util::dash(m.abbr.as_deref())
        )),
        None => lines.push("Midpoint:     -".into()),
    }
    match &c.emission_compartment {
        Some(e) => lines.push(format!("Compartment:  {}", e.name)),
        None => lines.push("Compartment:  -".into()),
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CategoriesCommand::List {
            list,
            method,
            compartment,
        } => {
            let mut query = util::list_query(&list)?;
            if let Some(id) = util::parse_scope_id(method.as_deref(), "method")? {
                query.set_scope(Scope::Method(id));
            } else if let Some(id) = util::parse_scope_id(compartment.as_deref(), "compartment")? {
                query.set_scope(Scope::Compartment(id));
            }

            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.impact_categories(&q).await
                })
                .await?
            } else {
                catalog.impact_categories(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| CategoryRow::from(r), |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoriesCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let category = catalog.impact_category(id).await?;
            let out =
                output::render_single(&global.output, &category, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CategoriesCommand::Create {
            name,
            indicator,
            indicator_description,
            unit,
            midpoint,
            compartment,
        } => {
            let input = ImpactCategoryInput {
                name,
                indicator_name: indicator,
                indicator_description,
                unit_id: unit
                    .as_deref()
                    .map(|u| util::parse_id(u, "unit"))
                    .transpose()?,
                midpoint_category_id: midpoint
                    .as_deref()
                    .map(|m| util::parse_id(m, "midpoint"))
                    .transpose()?,
                emission_compartment_id: compartment
                    .as_deref()
                    .map(|c| util::parse_id(c, "compartment"))
                    .transpose()?,
            };
            let created = catalog.create_impact_category(&input).await?;
            output::print_success(
                &format!("Created impact category '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        CategoriesCommand::Update {
            id,
            name,
            indicator,
            indicator_description,
            unit,
            midpoint,
            compartment,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.impact_category(id).await?;
            let input = ImpactCategoryInput {
                name: name.unwrap_or(current.name),
                indicator_name: indicator.unwrap_or(current.indicator_name),
                indicator_description: indicator_description.or(current.indicator_description),
                unit_id: match unit.as_deref() {
                    Some(u) => Some(util::parse_id(u, "unit")?),
                    None => current.unit.map(|u| u.id),
                },
                midpoint_category_id: match midpoint.as_deref() {
                    Some(m) => Some(util::parse_id(m, "midpoint")?),
                    None => current.midpoint_category.map(|m| m.id),
                },
                emission_compartment_id: match compartment.as_deref() {
                    Some(c) => Some(util::parse_id(c, "compartment")?),
                    None => current.emission_compartment.map(|e| e.id),
                },
            };
            let updated = catalog.update_impact_category(id, &input).await?;
            output::print_success(
                &format!("Updated impact category '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        CategoriesCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(&format!("Delete impact category {id}?"), global.yes)? {
                return Ok(());
            }
            catalog.delete_impact_category(parsed).await?;
            output::print_success("Impact category deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
