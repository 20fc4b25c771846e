use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::ItemDraft;
use crate::domain::shopping_list::model::ShoppingList;

pub struct UpdateListParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: Option<String>,
    pub comment: Option<String>,
    /// All-or-nothing replacement: `None` clears the products.
    pub products: Option<Vec<ItemDraft>>,
}

#[async_trait]
pub trait UpdateListUseCase: Send + Sync {
    async fn execute(&self, params: UpdateListParams) -> Result<ShoppingList, ShoppingListError>;
}
