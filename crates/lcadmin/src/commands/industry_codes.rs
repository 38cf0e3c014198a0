//! Industry code command handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, IndustryCode, IndustryCodeInput};

use crate::cli::{GlobalOpts, IndustryCodesArgs, IndustryCodesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CodeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&IndustryCode> for CodeRow {
    fn from(c: &IndustryCode) -> Self {
        Self {
            id: c.id.to_string(),
            code: c.code.clone(),
            name: c.name.clone(),
        }
    }
}

fn detail(c: &IndustryCode) -> String {
    format!("ID:    {}\nCode:  {}\nName:  {}", c.id, c.code, c.name)
}

pub async fn handle(
    catalog: &Catalog,
    args: IndustryCodesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        IndustryCodesCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.industry_codes(&q).await
                })
                .await?
            } else {
                catalog.industry_codes(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| CodeRow::from(r), |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        IndustryCodesCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let code = catalog.industry_code(id).await?;
            let out = output::render_single(&global.output, &code, detail, |c| c.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        IndustryCodesCommand::Create { code, name } => {
            let created = catalog
                .create_industry_code(&IndustryCodeInput { code, name })
                .await?;
            output::print_success(
                &format!("Created industry code '{}'", created.code),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        IndustryCodesCommand::Update { id, code, name } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.industry_code(id).await?;
            let input = IndustryCodeInput {
                code: code.unwrap_or(current.code),
                name: name.unwrap_or(current.name),
            };
            let updated = catalog.update_industry_code(id, &input).await?;
            output::print_success(
                &format!("Updated industry code '{}'", updated.code),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        IndustryCodesCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(&format!("Delete industry code {id}?"), global.yes)? {
                return Ok(());
            }
            catalog.delete_industry_code(parsed).await?;
            output::print_success("Industry code deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
