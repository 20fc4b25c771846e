use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::ownership::verify_ownership;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete_item::{DeleteItemParams, DeleteItemUseCase};

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger.info(&format!(
            "Removing item {} from list {}",
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
                "User {} denied removing items from list {}",
                params.user_id, params.list_id
            ));
            return Err(ShoppingListError::NotOwner);
        }

        list.remove_item(params.item_id);
        self.repository.save(&list).await?;

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::model::ListItem;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ShoppingListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ShoppingListRepo {
            async fn get_all_for_user(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<ShoppingList, RepositoryError>;
            async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn item(id: Uuid, name: &str) -> ListItem {
        ListItem::from_repository(id, name.to_string(), None, None, None, false)
    }

    #[tokio::test]
    async fn should_remove_only_the_matching_item() {
        let item_id = Uuid::new_v4();
        let owner = UserId::new("owner-1");
        let owner_clone = owner.clone();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(ShoppingList::from_repository(
                id,
                owner_clone.clone(),
                "Groceries".to_string(),
                String::new(),
                vec![
                    item(Uuid::new_v4(), "Milk"),
                    item(item_id, "Eggs"),
                    item(Uuid::new_v4(), "Bread"),
                ],
                chrono::Utc::now(),
            ))
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                list_id: Uuid::new_v4(),
                item_id,
                user_id: owner,
            })
            .await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.products.len(), 2);
        assert_eq!(list.products[0].name, "Milk");
        assert_eq!(list.products[1].name, "Bread");
    }

    #[tokio::test]
    async fn should_reject_non_owner_without_saving() {
        let owner = UserId::new("owner-1");
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(ShoppingList::from_repository(
                id,
                owner.clone(),
                "Groceries".to_string(),
                String::new(),
                vec![],
                chrono::Utc::now(),
            ))
        });
        mock_repo.expect_save().times(0);

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                list_id: Uuid::new_v4(),
                item_id: Uuid::new_v4(),
                user_id: UserId::new("intruder"),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::NotOwner));
    }

    #[tokio::test]
    async fn should_return_not_found_when_list_does_not_exist() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                list_id: Uuid::new_v4(),
                item_id: Uuid::new_v4(),
                user_id: UserId::new("owner-1"),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
