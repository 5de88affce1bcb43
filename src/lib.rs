#![deny(missing_docs)]
//! An optional value container.
//!
//! [`Maybe<T>`] holds exactly one value or nothing, replacing ambiguous
//! null signalling with a type whose absent state is explicit and has to
//! be checked before the value can be read.
//!
//! ```
//! use maybe_value::{IntoMaybe, Maybe};
//!
//! let present = Maybe::some(42);
//! assert!(present.has_value());
//! assert_eq!(present.to_string(), "Some: 42");
//!
//! let absent = Maybe::<i32>::none();
//! assert!(absent.value().is_err());
//! assert_eq!(absent.to_string(), "None");
//!
//! // Lift pre-existing nullable data into the container.
//! let lifted = Some("hello").into_maybe();
//! assert_eq!(lifted.as_nullable(), Some(&"hello"));
//! ```
use std::fmt::{self, Display, Formatter};

pub use crate::convert::IntoMaybe;
pub use crate::error::{Error, Result};

mod convert;
mod error;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State<T> {
    Present(T),
    Absent,
}

/// A container holding exactly one value, or nothing.
///
/// The state is fixed at construction and never changes: a present container
/// always has its value, an absent container never gains one. The inner
/// state is kept private so a `Maybe` can only be inspected through
/// [`has_value`](Self::has_value) and the accessors, never taken apart.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Maybe<T> {
    state: State<T>,
}

impl<T> Maybe<T> {
    /// Create a container holding `value`.
    ///
    /// To lift a nullable value into a container see [`IntoMaybe`].
    pub fn some(value: T) -> Self {
        Self {
            state: State::Present(value),
        }
    }

    /// Create a container without a value.
    pub fn none() -> Self {
        Self { state: State::Absent }
    }

    /// Create a value-carrying container from a nullable source that the
    /// caller asserts is present.
    ///
    /// Unlike [`IntoMaybe`] an absent source is a caller mistake here, not
    /// an empty container: it returns [`Error::AbsentValue`] instead of
    /// silently erasing the distinction between "nothing was passed on
    /// purpose" and "nothing was passed by accident".
    pub fn from_present(value: Option<T>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::some(value)),
            None => Err(Error::AbsentValue),
        }
    }

    /// Returns true if the container holds a value.
    pub fn has_value(&self) -> bool {
        matches!(self.state, State::Present(_))
    }

    /// Get the inner value.
    ///
    /// Returns [`Error::NoValue`] if the container is empty. Callers are
    /// expected to check [`has_value`](Self::has_value) first; the error is
    /// a contract violation signal, not a condition to retry.
    pub fn value(&self) -> Result<&T> {
        match &self.state {
            State::Present(value) => Ok(value),
            State::Absent => Err(Error::NoValue),
        }
    }

    /// Consume the container and return the inner value.
    ///
    /// Returns [`Error::NoValue`] if the container is empty.
    pub fn into_value(self) -> Result<T> {
        match self.state {
            State::Present(value) => Ok(value),
            State::Absent => Err(Error::NoValue),
        }
    }

    /// Borrow the value as a nullable reference.
    ///
    /// This is the escape hatch back into nullable representations, for
    /// code that has not adopted the container convention.
    pub fn as_nullable(&self) -> Option<&T> {
        match &self.state {
            State::Present(value) => Some(value),
            State::Absent => None,
        }
    }

    /// Consume the container and return the value as a nullable.
    pub fn into_nullable(self) -> Option<T> {
        match self.state {
            State::Present(value) => Some(value),
            State::Absent => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Present(value) => write!(f, "Some: {value}"),
            State::Absent => write!(f, "None"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Present(value) => write!(f, "Some({value:?})"),
            State::Absent => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn present_container() {
        let maybe = Maybe::some(1);
        assert!(maybe.has_value());
        assert_eq!(*maybe.value().unwrap(), 1);
    }

    #[test]
    fn absent_container() {
        let maybe = Maybe::<i32>::none();
        assert!(!maybe.has_value());
    }

    #[test]
    fn value_of_absent_container() {
        let maybe = Maybe::<i32>::none();
        assert_eq!(maybe.value(), Err(Error::NoValue));
        assert_eq!(maybe.into_value(), Err(Error::NoValue));
    }

    #[test]
    fn from_present_rejects_absent_source() {
        assert_eq!(Maybe::<i32>::from_present(None), Err(Error::AbsentValue));
    }

    #[test]
    fn from_present_accepts_value() {
        let maybe = Maybe::from_present(Some(2)).unwrap();
        assert_eq!(*maybe.value().unwrap(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Maybe::some(42).to_string(), "Some: 42");
        assert_eq!(Maybe::<i32>::none().to_string(), "None");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Maybe::some("a")), "Some(\"a\")");
        assert_eq!(format!("{:?}", Maybe::<&str>::none()), "None");
    }

    #[test]
    fn default_is_absent() {
        let maybe = Maybe::<i32>::default();
        assert!(!maybe.has_value());
    }

    #[test]
    fn repeated_reads_agree() {
        let maybe = Maybe::some(3);
        assert_eq!(maybe.has_value(), maybe.has_value());
        assert_eq!(maybe.value(), maybe.value());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::NoValue.to_string(),
            "cannot access the value of an option without a value"
        );
        assert_eq!(
            Error::AbsentValue.to_string(),
            "cannot construct an option with a value from an absent value"
        );
    }

    proptest! {
        #[test]
        fn roundtrip_prop(value in any::<i32>()) {
            let maybe = Maybe::some(value);
            prop_assert!(maybe.has_value());
            prop_assert_eq!(maybe.into_nullable(), Some(value));
        }
    }

    proptest! {
        #[test]
        fn lift_prop(value in proptest::option::of(any::<String>())) {
            let maybe = value.clone().into_maybe();
            prop_assert_eq!(maybe.has_value(), value.is_some());
            prop_assert_eq!(maybe.into_nullable(), value);
        }
    }

    proptest! {
        #[test]
        fn display_prop(value in any::<i32>()) {
            let maybe = Maybe::some(value);
            prop_assert_eq!(maybe.to_string(), format!("Some: {value}"));
        }
    }
}
