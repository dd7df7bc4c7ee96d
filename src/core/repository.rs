use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository abstracts storage of entities keyed by a storage-assigned id.
// Every call is expected to be atomic: a failed call leaves no partial change behind.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity and return the stored copy with its assigned id
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // delete an entity, returns number of removed records
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // list all entities in storage order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}
