use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::reset::ResetStoreUseCase;

pub struct ResetStoreUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetStoreUseCase for ResetStoreUseCaseImpl {
    async fn execute(&self) -> Result<(), ShoppingListError> {
        self.logger.warn("Wiping every list and item from the store");

        self.repository.delete_all().await?;

        Ok(())
    }
}
