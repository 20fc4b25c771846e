use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::ShoppingListError;

/// One product entry inside a list. Identity is stable across edits.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub comment: Option<String>,
    pub checked: bool,
}

impl ListItem {
    /// Constructor for data already persisted in the repository (no defaulting).
    pub fn from_repository(
        id: Uuid,
        name: String,
        amount: Option<f64>,
        unit: Option<String>,
        comment: Option<String>,
        checked: bool,
    ) -> Self {
        Self {
            id,
            name,
            amount,
            unit,
            comment,
            checked,
        }
    }
}

/// Partial update for a single item. Absent fields keep the stored value,
/// except `checked`, which is overwritten with its default when absent.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub comment: Option<String>,
    pub checked: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub comment: String,
    pub products: Vec<ListItem>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(
        owner: UserId,
        title: String,
        comment: Option<String>,
        products: Vec<ListItem>,
    ) -> Result<Self, ShoppingListError> {
        if title.trim().is_empty() {
            return Err(ShoppingListError::TitleEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            owner,
            title,
            comment: comment.unwrap_or_default(),
            products,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        owner: UserId,
        title: String,
        comment: String,
        products: Vec<ListItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            comment,
            products,
            created_at,
        }
    }

    /// New items land before the existing products.
    pub fn prepend_items(&mut self, items: Vec<ListItem>) {
        let mut products = items;
        products.append(&mut self.products);
        self.products = products;
    }

    /// Replaces the fields of the item with the given id, keeping its
    /// identity and position. `checked` is overwritten with `false` when the
    /// patch omits it, unlike the other fields.
    pub fn edit_item(&mut self, item_id: Uuid, patch: ItemPatch) -> Result<(), ShoppingListError> {
        let item = self
            .products
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ShoppingListError::ItemNotFound)?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(amount) = patch.amount {
            item.amount = Some(amount);
        }
        if let Some(unit) = patch.unit {
            item.unit = Some(unit);
        }
        if let Some(comment) = patch.comment {
            item.comment = Some(comment);
        }
        item.checked = patch.checked.unwrap_or(false);

        Ok(())
    }

    /// Removes the item with the given id, leaving all others untouched.
    /// Removing an id that is not present is a no-op.
    pub fn remove_item(&mut self, item_id: Uuid) {
        self.products.retain(|item| item.id != item_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::factory::{ItemDraft, make_items};

    fn owner() -> UserId {
        UserId::new("owner-1")
    }

    fn item(name: &str) -> ListItem {
        ListItem::from_repository(Uuid::new_v4(), name.to_string(), None, None, None, false)
    }

    #[test]
    fn should_create_list_when_title_valid() {
        let result = ShoppingList::new(owner(), "Groceries".to_string(), None, vec![]);

        assert!(result.is_ok());
        let list = result.unwrap();
        assert_eq!(list.title, "Groceries");
        assert_eq!(list.comment, "");
        assert!(list.products.is_empty());
        assert_eq!(list.owner, owner());
    }

    #[test]
    fn should_reject_when_title_empty() {
        let result = ShoppingList::new(owner(), "".to_string(), None, vec![]);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::TitleEmpty));
    }

    #[test]
    fn should_reject_when_title_only_whitespace() {
        let result = ShoppingList::new(owner(), "   ".to_string(), None, vec![]);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ShoppingListError::TitleEmpty));
    }

    #[test]
    fn should_prepend_items_before_existing_products() {
        let mut list =
            ShoppingList::new(owner(), "Groceries".to_string(), None, vec![item("Eggs")]).unwrap();

        list.prepend_items(vec![item("Milk"), item("Bread")]);

        assert_eq!(list.products.len(), 3);
        assert_eq!(list.products[0].name, "Milk");
        assert_eq!(list.products[1].name, "Bread");
        assert_eq!(list.products[2].name, "Eggs");
    }

    #[test]
    fn should_preserve_item_id_when_editing() {
        let milk = item("Milk");
        let milk_id = milk.id;
        let mut list = ShoppingList::new(owner(), "Groceries".to_string(), None, vec![milk]).unwrap();

        let patch = ItemPatch {
            name: Some("Whole Milk".to_string()),
            amount: Some(2.0),
            ..Default::default()
        };
        list.edit_item(milk_id, patch).unwrap();

        assert_eq!(list.products[0].id, milk_id);
        assert_eq!(list.products[0].name, "Whole Milk");
        assert_eq!(list.products[0].amount, Some(2.0));
    }

    #[test]
    fn should_overwrite_checked_when_patch_omits_it() {
        let mut checked_item = item("Milk");
        checked_item.checked = true;
        let item_id = checked_item.id;
        let mut list =
            ShoppingList::new(owner(), "Groceries".to_string(), None, vec![checked_item]).unwrap();

        list.edit_item(item_id, ItemPatch::default()).unwrap();

        assert!(!list.products[0].checked);
    }

    #[test]
    fn should_keep_other_fields_when_patch_omits_them() {
        let mut full = item("Milk");
        full.amount = Some(1.0);
        full.unit = Some("l".to_string());
        full.comment = Some("semi-skimmed".to_string());
        let item_id = full.id;
        let mut list = ShoppingList::new(owner(), "Groceries".to_string(), None, vec![full]).unwrap();

        let patch = ItemPatch {
            checked: Some(true),
            ..Default::default()
        };
        list.edit_item(item_id, patch).unwrap();

        let edited = &list.products[0];
        assert_eq!(edited.name, "Milk");
        assert_eq!(edited.amount, Some(1.0));
        assert_eq!(edited.unit, Some("l".to_string()));
        assert_eq!(edited.comment, Some("semi-skimmed".to_string()));
        assert!(edited.checked);
    }

    #[test]
    fn should_return_item_not_found_when_editing_unknown_id() {
        let mut list = ShoppingList::new(owner(), "Groceries".to_string(), None, vec![]).unwrap();

        let result = list.edit_item(Uuid::new_v4(), ItemPatch::default());

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::ItemNotFound
        ));
    }

    #[test]
    fn should_remove_exactly_one_item_and_keep_order() {
        let first = item("Milk");
        let second = item("Eggs");
        let third = item("Bread");
        let second_id = second.id;
        let mut list = ShoppingList::new(
            owner(),
            "Groceries".to_string(),
            None,
            vec![first.clone(), second, third.clone()],
        )
        .unwrap();

        list.remove_item(second_id);

        assert_eq!(list.products, vec![first, third]);
    }

    #[test]
    fn should_not_change_products_when_removing_unknown_id() {
        let mut list =
            ShoppingList::new(owner(), "Groceries".to_string(), None, vec![item("Milk")]).unwrap();

        list.remove_item(Uuid::new_v4());

        assert_eq!(list.products.len(), 1);
    }

    #[test]
    fn should_run_item_lifecycle_on_a_fresh_list() {
        // create -> add -> check off -> remove, as the frontend drives it
        let mut list = ShoppingList::new(owner(), "Groceries".to_string(), None, vec![]).unwrap();
        assert!(list.products.is_empty());

        let drafts = vec![ItemDraft {
            name: Some("Milk".to_string()),
            amount: Some(1.0),
            ..Default::default()
        }];
        list.prepend_items(make_items(Some(drafts)));
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].name, "Milk");
        assert_eq!(list.products[0].amount, Some(1.0));
        assert!(!list.products[0].checked);

        let item_id = list.products[0].id;
        let patch = ItemPatch {
            checked: Some(true),
            ..Default::default()
        };
        list.edit_item(item_id, patch).unwrap();
        assert!(list.products[0].checked);
        assert_eq!(list.products[0].name, "Milk");
        assert_eq!(list.products[0].id, item_id);

        list.remove_item(item_id);
        assert!(list.products.is_empty());
    }
}
