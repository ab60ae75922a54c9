use crate::svg::Object;

/// Builds an empty group node (`g`).
#[inline]
pub fn group(id: impl Into<String>) -> Object {
    Object::container(id, "g")
}
