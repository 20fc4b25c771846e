use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::use_cases::add_items::{AddItemsParams, AddItemsUseCase};
use business::domain::shopping_list::use_cases::create::{CreateListParams, CreateListUseCase};
use business::domain::shopping_list::use_cases::delete::{DeleteListParams, DeleteListUseCase};
use business::domain::shopping_list::use_cases::delete_item::{
    DeleteItemParams, DeleteItemUseCase,
};
use business::domain::shopping_list::use_cases::edit_item::{EditItemParams, EditItemUseCase};
use business::domain::shopping_list::use_cases::get_all::GetAllListsUseCase;
use business::domain::shopping_list::use_cases::get_by_id::{
    GetListByIdParams, GetListByIdUseCase,
};
use business::domain::shopping_list::use_cases::get_user_lists::GetUserListsUseCase;
use business::domain::shopping_list::use_cases::reset::ResetStoreUseCase;
use business::domain::shopping_list::use_cases::update::{UpdateListParams, UpdateListUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::UserIdentity;
use crate::api::shopping_list::dto::{
    AddItemsRequest, CreateListRequest, EditItemRequest, ShoppingListResponse, UpdateListRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    get_user_lists_use_case: Arc<dyn GetUserListsUseCase>,
    get_by_id_use_case: Arc<dyn GetListByIdUseCase>,
    create_use_case: Arc<dyn CreateListUseCase>,
    update_use_case: Arc<dyn UpdateListUseCase>,
    delete_use_case: Arc<dyn DeleteListUseCase>,
    add_items_use_case: Arc<dyn AddItemsUseCase>,
    edit_item_use_case: Arc<dyn EditItemUseCase>,
    delete_item_use_case: Arc<dyn DeleteItemUseCase>,
    get_all_use_case: Arc<dyn GetAllListsUseCase>,
    reset_use_case: Arc<dyn ResetStoreUseCase>,
}

impl ShoppingListApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_user_lists_use_case: Arc<dyn GetUserListsUseCase>,
        get_by_id_use_case: Arc<dyn GetListByIdUseCase>,
        create_use_case: Arc<dyn CreateListUseCase>,
        update_use_case: Arc<dyn UpdateListUseCase>,
        delete_use_case: Arc<dyn DeleteListUseCase>,
        add_items_use_case: Arc<dyn AddItemsUseCase>,
        edit_item_use_case: Arc<dyn EditItemUseCase>,
        delete_item_use_case: Arc<dyn DeleteItemUseCase>,
        get_all_use_case: Arc<dyn GetAllListsUseCase>,
        reset_use_case: Arc<dyn ResetStoreUseCase>,
    ) -> Self {
        Self {
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
        }
    }
}

fn invalid_list_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "invalid list id".to_string(),
    })
}

fn invalid_item_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "invalid item id".to_string(),
    })
}

/// Shopping list management API
///
/// Endpoints for managing per-user shopping lists and their items. The path
/// casing mirrors the routes the frontend already calls.
#[OpenApi]
impl ShoppingListApi {
    /// List the caller's shopping lists
    ///
    /// Returns every list owned by the caller, newest first.
    #[oai(
        path = "/api/shoppinglists",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_user_lists(&self, auth: UserIdentity) -> GetUserListsResponse {
        let user_id = UserId::new(auth.0);
        match self.get_user_lists_use_case.execute(user_id).await {
            Ok(lists) => {
                let responses: Vec<ShoppingListResponse> =
                    lists.into_iter().map(|l| l.into()).collect();
                GetUserListsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetUserListsResponse::BadRequest(json)
            }
        }
    }

    /// Get a shopping list
    ///
    /// Returns a single list by id, if the caller owns it.
    #[oai(
        path = "/api/shoppingLists/:sh_list_id",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_list_by_id(
        &self,
        auth: UserIdentity,
        sh_list_id: Path<String>,
    ) -> GetListByIdResponse {
        let id = match Uuid::parse_str(&sh_list_id.0) {
            Ok(id) => id,
            Err(_) => return GetListByIdResponse::BadRequest(invalid_list_id()),
        };

        let params = GetListByIdParams {
            id,
            user_id: UserId::new(auth.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(list) => GetListByIdResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetListByIdResponse::NotFound(json),
                    _ => GetListByIdResponse::BadRequest(json),
                }
            }
        }
    }

    /// Create a shopping list
    ///
    /// Creates a list owned by the caller. Initial items are optional and
    /// run through the same defaulting as added items.
    #[oai(
        path = "/api/shoppinglists",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn create_list(
        &self,
        auth: UserIdentity,
        body: Json<CreateListRequest>,
    ) -> CreateListResponse {
        let params = CreateListParams {
            user_id: UserId::new(auth.0),
            title: body.0.title,
            comment: body.0.comment,
            item_list: body
                .0
                .item_list
                .map(|items| items.into_iter().map(Into::into).collect()),
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateListResponse::BadRequest(json)
            }
        }
    }

    /// Update a shopping list
    ///
    /// Partial update of title and comment. `products` is replaced
    /// wholesale: omitting the field clears the list's items.
    #[oai(
        path = "/api/shoppingLists/:sh_list_id",
        method = "patch",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn update_list(
        &self,
        auth: UserIdentity,
        sh_list_id: Path<String>,
        body: Json<UpdateListRequest>,
    ) -> UpdateListResponse {
        let id = match Uuid::parse_str(&sh_list_id.0) {
            Ok(id) => id,
            Err(_) => return UpdateListResponse::BadRequest(invalid_list_id()),
        };

        let params = UpdateListParams {
            id,
            user_id: UserId::new(auth.0),
            title: body.0.title,
            comment: body.0.comment,
            products: body
                .0
                .products
                .map(|items| items.into_iter().map(Into::into).collect()),
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateListResponse::BadRequest(json)
            }
        }
    }

    /// Delete a shopping list
    ///
    /// Removes the list and its items, returning the list as it was.
    #[oai(
        path = "/api/:shoppinglist_id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete_list(
        &self,
        auth: UserIdentity,
        shoppinglist_id: Path<String>,
    ) -> DeleteListResponse {
        let id = match Uuid::parse_str(&shoppinglist_id.0) {
            Ok(id) => id,
            Err(_) => return DeleteListResponse::BadRequest(invalid_list_id()),
        };

        let params = DeleteListParams {
            id,
            user_id: UserId::new(auth.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(list) => DeleteListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteListResponse::NotFound(json),
                    _ => DeleteListResponse::BadRequest(json),
                }
            }
        }
    }

    /// Remove an item from a list
    ///
    /// Removes exactly the item with the given id; all other items keep
    /// their order and content.
    #[oai(
        path = "/api/shoppingLists/:sh_list_id/item/:item_id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete_item(
        &self,
        auth: UserIdentity,
        sh_list_id: Path<String>,
        item_id: Path<String>,
    ) -> DeleteItemResponse {
        let list_id = match Uuid::parse_str(&sh_list_id.0) {
            Ok(id) => id,
            Err(_) => return DeleteItemResponse::BadRequest(invalid_list_id()),
        };
        let item_id = match Uuid::parse_str(&item_id.0) {
            Ok(id) => id,
            Err(_) => return DeleteItemResponse::BadRequest(invalid_item_id()),
        };

        let params = DeleteItemParams {
            list_id,
            item_id,
            user_id: UserId::new(auth.0),
        };

        match self.delete_item_use_case.execute(params).await {
            Ok(list) => DeleteItemResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::BadRequest(json),
                }
            }
        }
    }

    /// Edit an item in a list
    ///
    /// Replaces the fields of a single item, keeping its identity. An
    /// omitted `checked` resets the item to unchecked.
    #[oai(
        path = "/api/shoppingLists/:sh_list_id/item/:item_id",
        method = "patch",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn edit_item(
        &self,
        auth: UserIdentity,
        sh_list_id: Path<String>,
        item_id: Path<String>,
        body: Json<EditItemRequest>,
    ) -> EditItemResponse {
        let list_id = match Uuid::parse_str(&sh_list_id.0) {
            Ok(id) => id,
            Err(_) => return EditItemResponse::BadRequest(invalid_list_id()),
        };
        let item_id = match Uuid::parse_str(&item_id.0) {
            Ok(id) => id,
            Err(_) => return EditItemResponse::BadRequest(invalid_item_id()),
        };

        let params = EditItemParams {
            list_id,
            item_id,
            user_id: UserId::new(auth.0),
            patch: body.0.into(),
        };

        match self.edit_item_use_case.execute(params).await {
            Ok(list) => EditItemResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EditItemResponse::NotFound(json),
                    _ => EditItemResponse::BadRequest(json),
                }
            }
        }
    }

    /// Add items to a list
    ///
    /// Accepts either `{itemList: [...]}` or a single item's fields at the
    /// top level. New items are prepended before the existing products.
    /// Mounted without the `/api` prefix, as the frontend calls it.
    #[oai(
        path = "/:sh_list_id/item/",
        method = "patch",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn add_items(
        &self,
        auth: UserIdentity,
        sh_list_id: Path<String>,
        body: Json<AddItemsRequest>,
    ) -> AddItemsResponse {
        let id = match Uuid::parse_str(&sh_list_id.0) {
            Ok(id) => id,
            Err(_) => return AddItemsResponse::BadRequest(invalid_list_id()),
        };

        let params = AddItemsParams {
            id,
            user_id: UserId::new(auth.0),
            items: body.0.into_drafts(),
        };

        match self.add_items_use_case.execute(params).await {
            Ok(list) => AddItemsResponse::Ok(Json(list.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddItemsResponse::BadRequest(json)
            }
        }
    }

    /// List every stored shopping list
    ///
    /// Development helper: returns all lists regardless of owner.
    #[oai(
        path = "/api/shoppingLists/all",
        method = "get",
        tag = "ApiTags::Admin"
    )]
    async fn get_all_lists(&self) -> GetAllListsResponse {
        match self.get_all_use_case.execute().await {
            Ok(lists) => {
                let responses: Vec<ShoppingListResponse> =
                    lists.into_iter().map(|l| l.into()).collect();
                GetAllListsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllListsResponse::BadRequest(json)
            }
        }
    }

    /// Wipe the store
    ///
    /// Development helper: deletes every list and item.
    #[oai(
        path = "/api/shoppingLists/reset",
        method = "delete",
        tag = "ApiTags::Admin"
    )]
    async fn reset_store(&self) -> ResetStoreResponse {
        match self.reset_use_case.execute().await {
            Ok(()) => ResetStoreResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ResetStoreResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EditItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResetStoreResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
