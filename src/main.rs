use std::path::{Path, PathBuf};
use std::process;

use nx_lldp::cli::Args;
use nx_lldp::prelude::*;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on its own
    // for invalid arguments)
    let args = Args::parse_args();

    let inventory = resolve_inventory(args.inventory.as_deref().map(Path::new))?;

    // Create adapters (Dependency Injection)
    let device_client = NxApiClient::new()?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = CollectNeighborsUseCase::new(device_client, progress_reporter);

    // Execute use case
    let response = use_case.execute(ReportRequest::new(inventory)).await?;
    let partial = response.has_failures();

    // Display progress message and render the report
    eprintln!("{}", args.format.progress_message());
    let formatter = args.format.create_formatter();
    let model = ReportReadModelBuilder::build(&response);
    let rendered = formatter.format(&model)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&rendered)?;

    Ok(if partial {
        ExitCode::PartialFailure
    } else {
        ExitCode::Success
    })
}
