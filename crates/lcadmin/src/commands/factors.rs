//! Emission-factor bulk transfer handlers.
//!
//! Export writes the backend's binary table to disk; import uploads a
//! local file as multipart. The file format is backend-defined.

use std::path::{Path, PathBuf};

use lcadmin_core::Catalog;

use crate::cli::{FactorsArgs, FactorsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    catalog: &Catalog,
    args: FactorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FactorsCommand::Export { output: path } => {
            let path = path.unwrap_or_else(|| PathBuf::from("factors.xlsx"));
            let bytes = catalog.export_emission_factors().await?;
            std::fs::write(&path, &bytes)?;
            output::print_success(
                &format!("Exported {} bytes to {}", bytes.len(), path.display()),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        FactorsCommand::Import { file } => {
            let contents = std::fs::read(&file)?;
            let summary = catalog
                .import_emission_factors(&file_name(&file), contents)
                .await?;

            output::print_success(
                &format!(
                    "Imported {} factors ({} skipped)",
                    summary.imported, summary.skipped
                ),
                &global.color,
                global.quiet,
            );
            for err in &summary.errors {
                eprintln!("  {err}");
            }
            Ok(())
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "factors.bin".into())
}
