use crate::Maybe;

/// Lift a possibly absent value into a [`Maybe`].
///
/// This is the sanctioned way to introduce a [`Maybe`] from pre-existing
/// nullable data. Every other construction path requires the caller to
/// already know, at the call site, whether a value exists.
pub trait IntoMaybe<T> {
    /// Convert into a [`Maybe`], treating absence as the empty state
    /// rather than as an error.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::some(value),
            None => Maybe::none(),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_nullable()
    }
}
