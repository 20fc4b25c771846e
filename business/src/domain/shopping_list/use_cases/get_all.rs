use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

/// Development helper: every list in the store, unfiltered by owner.
#[async_trait]
pub trait GetAllListsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ShoppingList>, ShoppingListError>;
}
