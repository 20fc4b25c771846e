use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::make_items;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::ownership::verify_ownership;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update::{UpdateListParams, UpdateListUseCase};

pub struct UpdateListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateListUseCase for UpdateListUseCaseImpl {
    async fn execute(&self, params: UpdateListParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!("Updating list: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        if !verify_ownership(&existing.owner, &params.user_id) {
            self.logger.warn(&format!(
                "User {} denied update of list {}",
                params.user_id, params.id
            ));
            return Err(ShoppingListError::NotOwner);
        }

        let title = params.title.unwrap_or(existing.title);
        let comment = params.comment.unwrap_or(existing.comment);
        // Products are replaced wholesale; omitting the field clears them.
        let products = make_items(params.products);

        let updated = ShoppingList::from_repository(
            existing.id,
            existing.owner,
            title,
            comment,
            products,
            existing.created_at,
        );
        self.repository.save(&updated).await?;

        self.logger.info(&format!("List updated: {}", updated.id));
        Ok(updated)
    }
}
