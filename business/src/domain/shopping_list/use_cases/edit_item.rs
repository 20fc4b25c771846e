use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ItemPatch, ShoppingList};

pub struct EditItemParams {
    pub list_id: Uuid,
    pub item_id: Uuid,
    pub user_id: UserId,
    pub patch: ItemPatch,
}

#[async_trait]
pub trait EditItemUseCase: Send + Sync {
    async fn execute(&self, params: EditItemParams) -> Result<ShoppingList, ShoppingListError>;
}
