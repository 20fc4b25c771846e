use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::ItemDraft;
use crate::domain::shopping_list::model::ShoppingList;

pub struct AddItemsParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<ItemDraft>,
}

#[async_trait]
pub trait AddItemsUseCase: Send + Sync {
    async fn execute(&self, params: AddItemsParams) -> Result<ShoppingList, ShoppingListError>;
}
