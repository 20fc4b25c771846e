#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.title_empty")]
    TitleEmpty,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.item_not_found")]
    ItemNotFound,
    #[error("shopping_list.not_owner")]
    NotOwner,
    #[error("shopping_list.none_for_user")]
    NoListsForUser,
    #[error("shopping_list.store_empty")]
    StoreEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
