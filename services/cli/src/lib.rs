mod cli;
mod demo;
mod infra;

use loan_advisor::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
