/// A stored user record.
///
/// `id` is the primary key and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}
