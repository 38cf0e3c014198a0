//! Organization command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, Organization, OrganizationInput};

use crate::cli::{GlobalOpts, OrganizationsArgs, OrganizationsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tax code")]
    tax_code: String,
    #[tabled(rename = "Industries")]
    industries: String,
}

impl From<&Organization> for OrgRow {
    fn from(o: &Organization) -> Self {
        Self {
            id: o.id.to_string(),
            name: o.name.clone(),
            tax_code: util::dash(o.tax_code.as_deref()),
            industries: o
                .industry_codes
                .iter()
                .map(|c| c.code.clone())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn detail(o: &Organization) -> String {
    let mut lines = vec![
        format!("ID:        {}", o.id),
        format!("Name:      {}", o.name),
        format!("Tax code:  {}", util::dash(o.tax_code.as_deref())),
    ];
    if let Some(desc) = &o.description {
        lines.push(format!("About:     {desc}"));
    }
    for code in &o.industry_codes {
        lines.push(format!("Industry:  {} {}", code.code, code.name));
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: OrganizationsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrganizationsCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.organizations(&q).await
                })
                .await?
            } else {
                catalog.organizations(&query).await?
            };
            let out = output::render_page(&global.output, &page, |r| OrgRow::from(r), |o| o.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrganizationsCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let org = catalog.organization(id).await?;
            let out = output::render_single(&global.output, &org, detail, |o| o.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrganizationsCommand::Create {
            name,
            description,
            tax_code,
            industry_codes,
        } => {
            let input = OrganizationInput {
                name,
                description,
                tax_code,
                industry_code_ids: parse_industry_ids(industry_codes)?,
            };
            let created = catalog.create_organization(&input).await?;
            output::print_success(
                &format!("Created organization '{}'", created.name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        OrganizationsCommand::Update {
            id,
            name,
            description,
            tax_code,
            industry_codes,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.organization(id).await?;
            let input = OrganizationInput {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
                tax_code: tax_code.or(current.tax_code),
                industry_code_ids: match industry_codes {
                    Some(ids) => parse_industry_ids(Some(ids))?,
                    None => current.industry_codes.iter().map(|c| c.id).collect(),
                },
            };
            let updated = catalog.update_organization(id, &input).await?;
            output::print_success(
                &format!("Updated organization '{}'", updated.name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        OrganizationsCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(&format!("Delete organization {id}?"), global.yes)? {
                return Ok(());
            }
            catalog.delete_organization(parsed).await?;
            output::print_success("Organization deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}

fn parse_industry_ids(ids: Option<Vec<String>>) -> Result<Vec<uuid::Uuid>, CliError> {
    ids.unwrap_or_default()
        .iter()
        .map(|s| util::parse_id(s, "industry-codes"))
        .collect()
}
