use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::factory::make_items;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::create::{CreateListParams, CreateListUseCase};

pub struct CreateListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListUseCase for CreateListUseCaseImpl {
    async fn execute(&self, params: CreateListParams) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Creating list: {}", params.title));

        let products = make_items(params.item_list);
        let list = ShoppingList::new(params.user_id, params.title, params.comment, products)?;
        self.repository.save(&list).await?;

        self.logger.info(&format!("List created: {}", list.id));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::factory::ItemDraft;
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
    async fn should_create_list_owned_by_caller() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateListParams {
                user_id: UserId::new("user-1"),
                title: "Groceries".to_string(),
                comment: None,
                item_list: None,
            })
            .await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.title, "Groceries");
        assert_eq!(list.owner, UserId::new("user-1"));
        assert!(list.products.is_empty());
    }

    #[tokio::test]
    async fn should_run_initial_items_through_factory() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateListParams {
                user_id: UserId::new("user-1"),
                title: "Groceries".to_string(),
                comment: Some("weekly run".to_string()),
                item_list: Some(vec![ItemDraft::default()]),
            })
            .await;

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.comment, "weekly run");
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].name, "no name");
        assert!(!list.products[0].checked);
    }

    #[tokio::test]
    async fn should_reject_when_title_empty() {
        let mock_repo = MockShoppingListRepo::new();

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateListParams {
                user_id: UserId::new("user-1"),
                title: "".to_string(),
                comment: None,
                item_list: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_propagate_store_failure_on_save() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Database("disk full".to_string())));

        let use_case = CreateListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateListParams {
                user_id: UserId::new("user-1"),
                title: "Groceries".to_string(),
                comment: None,
                item_list: None,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::Database(_))
        ));
    }
}
