use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Lists owned by the given user, newest first.
    async fn get_all_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ShoppingList>, RepositoryError>;
    /// Every list in the store, regardless of owner.
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError>;
    /// Persists the whole aggregate: the list row and its items in order.
    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Wipes both collections.
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
