use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

#[async_trait]
pub trait GetUserListsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<ShoppingList>, ShoppingListError>;
}
