use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shopping_list::factory::ItemDraft;
use business::domain::shopping_list::model::{ItemPatch, ListItem, ShoppingList};

/// Loose item payload: every field optional, defaults applied server-side.
#[derive(Debug, Clone, Object)]
pub struct ItemPayload {
    /// Item name (defaults to "no name")
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Quantity
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    /// Unit for the quantity (e.g. "kg")
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    /// Free-text note
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Whether the item is already checked off
    #[oai(skip_serializing_if_is_none)]
    pub checked: Option<bool>,
}

impl From<ItemPayload> for ItemDraft {
    fn from(payload: ItemPayload) -> Self {
        Self {
            name: payload.name,
            amount: payload.amount,
            unit: payload.unit,
            comment: payload.comment,
            checked: payload.checked,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateListRequest {
    /// List title (cannot be empty)
    pub title: String,
    /// Optional list comment
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Initial items
    #[oai(skip_serializing_if_is_none)]
    pub item_list: Option<Vec<ItemPayload>>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateListRequest {
    /// New title
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// New comment
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Full replacement for the products; omitting the field clears them
    #[oai(skip_serializing_if_is_none)]
    pub products: Option<Vec<ItemPayload>>,
}

#[derive(Debug, Clone, Object)]
pub struct EditItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Omitting this resets the item to unchecked
    #[oai(skip_serializing_if_is_none)]
    pub checked: Option<bool>,
}

impl From<EditItemRequest> for ItemPatch {
    fn from(request: EditItemRequest) -> Self {
        Self {
            name: request.name,
            amount: request.amount,
            unit: request.unit,
            comment: request.comment,
            checked: request.checked,
        }
    }
}

/// Accepts either a batch (`itemList`) or a single item's fields at the top
/// level.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddItemsRequest {
    #[oai(skip_serializing_if_is_none)]
    pub item_list: Option<Vec<ItemPayload>>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub checked: Option<bool>,
}

impl AddItemsRequest {
    pub fn into_drafts(self) -> Vec<ItemDraft> {
        match self.item_list {
            Some(items) => items.into_iter().map(Into::into).collect(),
            None => vec![ItemDraft {
                name: self.name,
                amount: self.amount,
                unit: self.unit,
                comment: self.comment,
                checked: self.checked,
            }],
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub amount: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub comment: Option<String>,
    /// Whether the item has been checked off
    pub checked: bool,
}

impl From<ListItem> for ListItemResponse {
    fn from(item: ListItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            amount: item.amount,
            unit: item.unit,
            comment: item.comment,
            checked: item.checked,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    /// List unique identifier
    pub id: String,
    /// List title
    pub title: String,
    /// List comment
    pub comment: String,
    /// Items in display order
    pub products: Vec<ListItemResponse>,
    /// Identity of the owning user
    pub owner: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            title: list.title,
            comment: list.comment,
            products: list.products.into_iter().map(Into::into).collect(),
            owner: list.owner.to_string(),
            created_at: list.created_at,
        }
    }
}
