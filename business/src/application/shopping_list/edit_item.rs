use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::ownership::verify_ownership;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::edit_item::{EditItemParams, EditItemUseCase};

pub struct EditItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EditItemUseCase for EditItemUseCaseImpl {
    async fn execute(&self, params: EditItemParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Editing item {} in list {}",
            params.item_id, params.list_id
        ));

        let mut list = self
            .repository
            .get_by_id(params.list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        if !verify_ownership(&list.owner, &params.user_id) {
            self.logger.warn(&format!(
                "User {} denied editing list {}",
                params.user_id, params.list_id
            ));
            return Err(ShoppingListError::NotOwner);
        }

        list.edit_item(params.item_id, params.patch)?;
        self.repository.save(&list).await?;

        Ok(list)
    }
}
