use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::{ListItem, ShoppingList};

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn into_domain(self, products: Vec<ListItem>) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            UserId::new(self.owner_id),
            self.title,
            self.comment,
            products,
            self.created_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ListItemEntity {
    pub id: Uuid,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub comment: Option<String>,
    pub checked: bool,
}

impl ListItemEntity {
    pub fn into_domain(self) -> ListItem {
        ListItem::from_repository(
            self.id,
            self.name,
            self.amount,
            self.unit,
            self.comment,
            self.checked,
        )
    }
}
