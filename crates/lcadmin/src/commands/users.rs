//! Console user administration handlers.

use tabled::Tabled;

use lcadmin_core::{Catalog, User, UserInput, UserRole};

use crate::cli::{GlobalOpts, RoleArg, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Self::Admin,
            RoleArg::Manager => Self::Manager,
        }
    }
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.user_name.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            active: if u.active { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(u: &User) -> String {
    let mut lines = vec![
        format!("ID:        {}", u.id),
        format!("Username:  {}", u.user_name),
        format!("Email:     {}", u.email),
        format!("Role:      {}", u.role),
        format!("Active:    {}", if u.active { "yes" } else { "no" }),
    ];
    if let Some(created) = u.created_at {
        lines.push(format!("Created:   {}", created.format("%Y-%m-%d %H:%M")));
    }
    lines.join("\n")
}

pub async fn handle(
    catalog: &Catalog,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List(list) => {
            let query = util::list_query(&list)?;
            let page = if list.all {
                util::collect_all(query, global.quiet, |q| async move {
                    catalog.users(&q).await
                })
                .await?
            } else {
                catalog.users(&query).await?
            };
            let out =
                output::render_page(&global.output, &page, |r| UserRow::from(r), |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Get { id } => {
            let id = util::parse_id(&id, "id")?;
            let user = catalog.user(id).await?;
            let out = output::render_single(&global.output, &user, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            username,
            email,
            role,
            inactive,
        } => {
            let password =
                rpassword::prompt_password(format!("Initial password for {username}: "))
                    .map_err(CliError::Io)?;
            if password.len() < 8 {
                return Err(CliError::Validation {
                    field: "password".into(),
                    reason: "must be at least 8 characters".into(),
                });
            }

            let input = UserInput {
                user_name: username,
                email,
                role: role.into(),
                active: !inactive,
                password: Some(password),
            };
            let created = catalog.create_user(&input).await?;
            output::print_success(
                &format!("Created user '{}'", created.user_name),
                &global.color,
                global.quiet,
            );
            output::print_output(&created.id.to_string(), global.quiet);
            Ok(())
        }

        UsersCommand::Update {
            id,
            username,
            email,
            role,
            active,
        } => {
            let id = util::parse_id(&id, "id")?;
            let current = catalog.user(id).await?;
            let input = UserInput {
                user_name: username.unwrap_or(current.user_name),
                email: email.unwrap_or(current.email),
                role: role.map_or(current.role, Into::into),
                active: active.unwrap_or(current.active),
                password: None,
            };
            let updated = catalog.update_user(id, &input).await?;
            output::print_success(
                &format!("Updated user '{}'", updated.user_name),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        UsersCommand::Delete { id } => {
            let parsed = util::parse_id(&id, "id")?;
            if !util::confirm(
                &format!("Delete user {id}? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            catalog.delete_user(parsed).await?;
            output::print_success("User deleted", &global.color, global.quiet);
            Ok(())
        }
    }
}
