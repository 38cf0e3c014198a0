//! Impact method command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, ImpactMethod, ImpactMethodInput, Perspective};

use crate::cli::{GlobalOpts, MethodsArgs, MethodsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct MethodRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Perspective")]
    perspective: String,
}

impl From<&ImpactMethod> for MethodRow {
    fn from(m: &ImpactMethod) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            version: util::dash(m.version.as_deref()),
            perspective: m
                .perspective
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

#[derive(Tabled)]
struct PerspectiveRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Abbr")]
    abbr: String,
}

impl From<&Perspective> for PerspectiveRow {
    fn from(p: &Perspective) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            abbr: util::dash(p.abbr.as_deref()),
        }
    }
}

fn detail(m: &ImpactMethod) -> String {
    let mut lines = vec![
        format!("ID:           {}", m.id),
        format!("Name:         {}", m.name),
        format!("Version:      {}", util::dash(m.version.as_deref())),
        format!("Reference:    {}", util::dash(m.reference.as_deref())),
    ];
    match &m.perspective {
        Some(p) => lines.push(format!(
            "Perspective:  {} ({})",
            p.name,
            util::dash(p.abbr.as_deref())
        )),
        None => lines.push("Perspective:  -".into()),
    }
    if let Some(desc) = &m.description {
        lines.push(format!("Description:  {desc}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    catalog: &Catalog,
    args: MethodsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MethodsCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.impact_methods(&q).await
                })
                .await?
            } else {
                catalog.impact_methods(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| MethodRow::from(r), |m| m.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MethodsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let method = catalog.impact_method(id).await?;
            let out = output::render_single(&global.output, &method, detail, |m| m.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MethodsCommand::Create {
            name,
            description,
            version,
            reference,
            perspective,
        } => {
            let input = ImpactMethodInput {
                name,
                description,
                version,
                reference,
                perspective_id: perspective
                    .as_deref()
                    .map(|p| util::parse_id(p, "perspective"))
                    .transpose()?,
            };
            let created = catalog.create_impact_method(&input).await?;
            output::print_success(
                &format!("Created impact method '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        MethodsCommand::Update {
            id,
            name,
            description,
            version,
            reference,
            perspective,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.impact_method(id).await?;
            let input = ImpactMethodInput {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
                version: version.or(current.version),
                reference: reference.or(current.reference),
                perspective_id: match perspective.as_deref() {
                    Some(p) => Some(util::parse_id(p, "perspective")?),
                    None => current.perspective.map(|p| p.id),
                },
            };
            let updated = catalog.update_impact_method(id, &input).await?;
            output::print_success(
                &format!("Updated impact method '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        MethodsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(
                &format!("Delete impact method {id}? Its category links go with it."),
                global.yes,
            )? {
                return Ok(());
            }
            catalog.delete_impact_method(parsed).await?;
            output::print_success("Impact method deleted", &global.color, global.quiet);
            Ok(())
        }

        MethodsCommand::Perspectives => {
            let perspectives = catalog.perspectives().await?;
            let out = output::render_list(
                &global.output,
                &perspectives,
                |r| PerspectiveRow::from(r),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
