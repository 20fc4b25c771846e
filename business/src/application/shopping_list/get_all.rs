use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_all::GetAllListsUseCase;

pub struct GetAllListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllListsUseCase for GetAllListsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger.info("Fetching every list in the store");

        let lists = self.repository.get_all().await?;
        if lists.is_empty() {
            return Err(ShoppingListError::StoreEmpty);
        }

        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
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

    #[tokio::test]
    async fn should_return_lists_from_every_owner() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                ShoppingList::from_repository(
                    Uuid::new_v4(),
                    UserId::new("user-1"),
                    "Groceries".to_string(),
                    String::new(),
                    vec![],
                    chrono::Utc::now(),
                ),
                ShoppingList::from_repository(
                    Uuid::new_v4(),
                    UserId::new("user-2"),
                    "Hardware".to_string(),
                    String::new(),
                    vec![],
                    chrono::Utc::now(),
                ),
            ])
        });

        let use_case = GetAllListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_fail_when_store_is_empty() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::StoreEmpty));
    }
}
