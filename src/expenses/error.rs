use thiserror::Error;

/// Failures raised by [`ExpenseList`](super::list::ExpenseList) mutations.
///
/// Every variant leaves the list untouched; the `Display` strings are shown
/// to the user verbatim as blocking notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Empty trimmed title or empty price.
    #[error("Enter a valid item name and price.")]
    EmptyInput,

    /// Price whose first character is `'0'`. This is a textual check, so it
    /// rejects "0" and "05" but also "0.5".
    #[error("Price cannot start with 0.")]
    LeadingZero,

    /// Another record already owns this trimmed title (exact match).
    #[error("Item already exists in the list.")]
    DuplicateTitle,

    /// `update` was called with no edit in progress.
    #[error("No expense is being edited.")]
    NoActiveEdit,
}
