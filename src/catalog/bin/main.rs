use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use lms_catalog::catalog::controller::ConsoleController;
use lms_catalog::catalog::domain::CatalogService;
use lms_catalog::catalog::factory;
use lms_catalog::core::domain::Configuration;
use lms_catalog::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    // optional first argument: path to a json configuration file
    let config = match std::env::args().nth(1) {
        Some(path) => Configuration::load(Path::new(path.as_str()))?,
        None => Configuration::new("main"),
    };
    tracing::info!(branch = %config.branch_id, notifier = ?config.notifier, "starting catalog");

    let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&config));
    println!("Library Management System Initialized.");

    let stdin = std::io::stdin();
    let mut controller = ConsoleController::new(&config, svc, stdin.lock(), std::io::stdout());
    controller.run().await?;
    Ok(())
}
