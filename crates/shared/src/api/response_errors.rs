use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{Nothing, ServerError};

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error("{}::{}: {:?}", stringify!($name), stringify!($variant), self)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(AuthError {
    #[code(StatusCode::UNAUTHORIZED)]
    Unauthorized,
});

response_error!(UserError {
    #[code(StatusCode::NOT_FOUND)]
    NotFound,
    #[code(StatusCode::CONFLICT)]
    UsernameTaken,
});

// Plan not found and plan owned by someone else are deliberately the same
// answer, so callers can't probe for other users' plan ids
response_error!(ToggleError {
    #[code(StatusCode::NOT_FOUND)]
    PlanNotFound,
});

response_error!(PlanError {
    #[code(StatusCode::NOT_FOUND)]
    NotFound,
    #[code(StatusCode::NOT_FOUND)]
    ExerciseNotFound,
});

response_error!(ExerciseError {
    #[code(StatusCode::CONFLICT)]
    NameTaken,
});

response_error!(ImportError {
    #[code(StatusCode::BAD_REQUEST)]
    EmptyPlan,
});

// Alias used to allow future expansion of the errors without having to go back
// and update all routes that use it
pub type FetchError = Nothing;
