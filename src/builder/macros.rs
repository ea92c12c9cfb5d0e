//! Macros for ergonomic hierarchy declaration.

/// Generate a `StateId` enum for a hierarchy.
///
/// Variants are named after the states they identify; `name()` returns the
/// variant name.
///
/// # Example
///
/// ```
/// use hsmrt::core::StateId;
/// use hsmrt::state_ids;
///
/// state_ids! {
///     pub enum CharacterState {
///         Alive,
///         Locomotion,
///         Stand,
///         Move,
///     }
/// }
///
/// assert_eq!(CharacterState::Locomotion.name(), "Locomotion");
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
