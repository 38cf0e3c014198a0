//! Dashboard summary handler.

use tabled::Tabled;

use lcadmin_core::{Catalog, DashboardSummary};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Entity")]
    entity: &'static str,
    #[tabled(rename = "Records")]
    records: u64,
}

fn rows(summary: &DashboardSummary) -> Vec<CountRow> {
    vec![
        CountRow {
            entity: "Impact methods",
            records: summary.impact_methods,
        },
        CountRow {
            entity: "Impact categories",
            records: summary.impact_categories,
        },
        CountRow {
            entity: "Midpoint categories",
            records: summary.midpoint_categories,
        },
        CountRow {
            entity: "Units",
            records: summary.units,
        },
        CountRow {
            entity: "Unit groups",
            records: summary.unit_groups,
        },
        CountRow {
            entity: "Organizations",
            records: summary.organizations,
        },
        CountRow {
            entity: "Industry codes",
            records: summary.industry_codes,
        },
        CountRow {
            entity: "Emission compartments",
            records: summary.emission_compartments,
        },
        CountRow {
            entity: "Users",
            records: summary.users,
        },
        CountRow {
            entity: "Emission factors",
            records: summary.emission_factors,
        },
    ]
}

pub async fn handle(catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = catalog.dashboard_summary().await?;

    // Table format gets the per-entity breakdown; structured formats
    // serialize the summary itself.
    let out = match global.output {
        crate::cli::OutputFormat::Table => {
            use tabled::{Table, settings::Style};
            Table::new(rows(&summary)).with(Style::rounded()).to_string()
        }
        _ => output::render_single(&global.output, &summary, |_| String::new(), |_| String::new()),
    };

    output::print_output(&out, global.quiet);
    Ok(())
}
