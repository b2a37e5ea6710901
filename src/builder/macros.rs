//! Macros for ergonomic state and input definitions.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use reactive_automaton::state_enum;
/// use reactive_automaton::core::State;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///     }
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Input` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use reactive_automaton::input_enum;
/// use reactive_automaton::core::Input;
///
/// input_enum! {
///     pub enum AuthInput {
///         Login,
///         LoginOk,
///     }
/// }
///
/// assert_eq!(AuthInput::LoginOk.name(), "LoginOk");
/// ```
#[macro_export]
macro_rules! input_enum {
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Input for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Input, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
        }
    }

    input_enum! {
        enum TestInput {
            Begin,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
    }

    #[test]
    fn input_enum_macro_generates_trait() {
        assert_eq!(TestInput::Begin.name(), "Begin");
        assert_eq!(TestInput::Finish.name(), "Finish");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }
}
