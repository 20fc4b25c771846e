use uuid::Uuid;

use super::model::ListItem;

/// Name substituted when an incoming item carries none.
pub const DEFAULT_ITEM_NAME: &str = "no name";

/// Loosely-typed item payload as it arrives from the client. Every field is
/// optional; defaulting happens in [`make_items`].
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub comment: Option<String>,
    pub checked: Option<bool>,
}

/// Maps raw item payloads into list items, assigning fresh identities.
/// Absent input normalizes to an empty sequence, never to null.
pub fn make_items(drafts: Option<Vec<ItemDraft>>) -> Vec<ListItem> {
    drafts
        .unwrap_or_default()
        .into_iter()
        .map(|draft| ListItem {
            id: Uuid::new_v4(),
            name: draft.name.unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            amount: draft.amount,
            unit: draft.unit,
            comment: draft.comment,
            checked: draft.checked.unwrap_or(false),
        })
        .collect()
}
