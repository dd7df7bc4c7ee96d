use crate::books::factory;
use crate::catalog::blocking::BlockingCatalogService;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_notifier;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    let notifier = create_notifier(config.notifier);
    Box::new(CatalogServiceImpl::new(config, book_repo, notifier))
}

pub fn create_blocking_catalog_service(config: &Configuration) -> LibraryResult<BlockingCatalogService> {
    BlockingCatalogService::new(create_catalog_service(config))
}
