//! Shared helpers for command handlers.

use std::future::Future;

use indicatif::{ProgressBar, ProgressStyle};
use uuid::Uuid;

use lcadmin_core::{CoreError, ListQuery, Page, PageSize};

use crate::cli::ListArgs;
use crate::error::CliError;

/// Parse a UUID argument.
pub fn parse_id(value: &str, field: &str) -> Result<Uuid, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("'{value}' is not a valid UUID"),
    })
}

/// Parse an optional scope id; the literal `all` (and an absent flag)
/// means unscoped.
pub fn parse_scope_id(value: Option<&str>, field: &str) -> Result<Option<Uuid>, CliError> {
    match value {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(v) => parse_id(v, field).map(Some),
    }
}

/// Build a `ListQuery` from the shared list flags. A `--query` view
/// state is the base; explicit flags override its fields.
pub fn list_query(args: &ListArgs) -> Result<ListQuery, CliError> {
    let mut query = match args.query.as_deref() {
        Some(saved) => ListQuery::from_query_string(saved),
        None => ListQuery::new(),
    };

    if let Some(keyword) = args.keyword.as_deref() {
        query.set_keyword(keyword);
    }
    if args.page_size != 10 {
        let size = PageSize::from_u32(args.page_size).ok_or_else(|| CliError::Validation {
            field: "page-size".into(),
            reason: format!("'{}' is not one of 5, 10, 20", args.page_size),
        })?;
        query.set_page_size(size);
    }
    if args.page != 1 {
        query.set_page(args.page);
    }

    Ok(query)
}

/// Collect every page of a listing into one synthetic page.
pub async fn collect_all<T, F, Fut>(
    mut query: ListQuery,
    quiet: bool,
    fetch: F,
) -> Result<Page<T>, CliError>
where
    F: Fn(ListQuery) -> Fut,
    Fut: Future<Output = Result<Page<T>, CoreError>>,
{
    let spinner = (!quiet).then(|| {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
        );
        bar
    });

    let mut items = Vec::new();
    query.set_page(1);

    loop {
        let page = fetch(query.clone()).await?;
        let total = page.total_pages.max(1);
        if let Some(bar) = &spinner {
            bar.set_message(format!("fetching page {}/{total}", page.current_page));
            bar.tick();
        }
        let at_end = page.items.is_empty() || page.current_page >= total;
        items.extend(page.items);
        if at_end {
            break;
        }
        query.set_page(page.current_page + 1);
    }

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    Ok(Page {
        current_page: 1,
        total_pages: 1,
        items,
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Placeholder for absent optional display fields.
pub fn dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_owned()
}
