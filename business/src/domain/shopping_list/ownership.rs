use crate::domain::shared::value_objects::UserId;

/// Compares a list's stored owner against the identity attached to the
/// incoming request. Must pass before any read or mutation that targets a
/// specific list.
pub fn verify_ownership(owner: &UserId, user: &UserId) -> bool {
    owner.as_str() == user.as_str()
}
