use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_user_lists::GetUserListsUseCase;

pub struct GetUserListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserListsUseCase for GetUserListsUseCaseImpl {
    async fn execute(&self, user_id: UserId) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger
            .info(&format!("Fetching lists for user: {}", user_id));

        let lists = self.repository.get_all_for_user(&user_id).await?;
        if lists.is_empty() {
            return Err(ShoppingListError::NoListsForUser);
        }

        Ok(lists)
    }
}
