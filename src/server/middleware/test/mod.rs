use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{Admin, AuthGuard},
        session::{AuthSession, FlashSession},
    },
};
use test_utils::context::TestContext;
