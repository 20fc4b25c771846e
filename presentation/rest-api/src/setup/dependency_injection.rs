use std::sync::Arc;

use logger::TracingLogger;
use persistence::shopping_list::repository::ShoppingListRepositoryPostgres;

use business::application::shopping_list::add_items::AddItemsUseCaseImpl;
use business::application::shopping_list::create::CreateListUseCaseImpl;
use business::application::shopping_list::delete::DeleteListUseCaseImpl;
use business::application::shopping_list::delete_item::DeleteItemUseCaseImpl;
use business::application::shopping_list::edit_item::EditItemUseCaseImpl;
use business::application::shopping_list::get_all::GetAllListsUseCaseImpl;
use business::application::shopping_list::get_by_id::GetListByIdUseCaseImpl;
use business::application::shopping_list::get_user_lists::GetUserListsUseCaseImpl;
use business::application::shopping_list::reset::ResetStoreUseCaseImpl;
use business::application::shopping_list::update::UpdateListUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let repository = Arc::new(ShoppingListRepositoryPostgres::new(pool));

        // Shopping list use cases
        let get_user_lists_use_case = Arc::new(GetUserListsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetListByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateListUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateListUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteListUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_items_use_case = Arc::new(AddItemsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let edit_item_use_case = Arc::new(EditItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllListsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let reset_use_case = Arc::new(ResetStoreUseCaseImpl {
            repository,
            logger,
        });

        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            get_user_lists_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            add_items_use_case,
            edit_item_use_case,
            delete_item_use_case,
            get_all_use_case,
            reset_use_case,
        );

        Ok(Self {
            health_api,
            shopping_list_api,
        })
    }
}
