use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct DeleteListParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteListUseCase: Send + Sync {
    /// Returns the list as it was before deletion.
    async fn execute(&self, params: DeleteListParams) -> Result<ShoppingList, ShoppingListError>;
}
