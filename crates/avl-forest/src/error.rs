use thiserror::Error;

/// Failures reported by [`AvlTree`](crate::avl::AvlTree) operations.
///
/// Missing keys are not errors; lookups report them as `None` or an empty
/// path instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("an item with the same key is already stored")]
    DuplicateKey,
    #[error("level {level} does not exist")]
    LevelNotFound { level: i32 },
    #[error("max-sum path requires integer items, got `{type_name}`")]
    UnsupportedItemType { type_name: &'static str },
    #[error("max-sum path overflowed i64")]
    SumOverflow,
}
