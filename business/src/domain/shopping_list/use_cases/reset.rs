use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

/// Development helper: wipes every list and item from the store.
#[async_trait]
pub trait ResetStoreUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ShoppingListError>;
}
