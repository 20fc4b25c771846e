use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::ownership::verify_ownership;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_id::{GetListByIdParams, GetListByIdUseCase};

pub struct GetListByIdUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListByIdUseCase for GetListByIdUseCaseImpl {
    async fn execute(&self, params: GetListByIdParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!("Fetching list: {}", params.id));

        // Existence first, then ownership
        let list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        if !verify_ownership(&list.owner, &params.user_id) {
            self.logger.warn(&format!(
                "User {} denied access to list {}",
                params.user_id, params.id
            ));
            return Err(ShoppingListError::NotOwner);
        }

        Ok(list)
    }
}
