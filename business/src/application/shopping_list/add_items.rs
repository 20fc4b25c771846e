use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::make_items;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::ownership::verify_ownership;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::add_items::{AddItemsParams, AddItemsUseCase};

pub struct AddItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemsUseCase for AddItemsUseCaseImpl {
    async fn execute(&self, params: AddItemsParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Adding {} item(s) to list: {}",
            params.items.len(),
            params.id
        ));

        let mut list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        if !verify_ownership(&list.owner, &params.user_id) {
            self.logger.warn(&format!(
                "User {} denied adding items to list {}",
                params.user_id, params.id
            ));
            return Err(ShoppingListError::NotOwner);
        }

        list.prepend_items(make_items(Some(params.items)));
        self.repository.save(&list).await?;

        Ok(list)
    }
}
