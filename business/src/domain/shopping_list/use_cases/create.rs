use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::ItemDraft;
use crate::domain::shopping_list::model::ShoppingList;

pub struct CreateListParams {
    pub user_id: UserId,
    pub title: String,
    pub comment: Option<String>,
    pub item_list: Option<Vec<ItemDraft>>,
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ShoppingListError>;
}
