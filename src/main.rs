use cov_report::{cli, models::ReportError};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Failures of the coverage tool keep its exit code.
            match e.downcast_ref::<ReportError>() {
                Some(report_error) => ExitCode::from(report_error.exit_code()),
                None => ExitCode::FAILURE,
            }
        }
    }
}
