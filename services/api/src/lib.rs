mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use banca_virtual::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
