use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{LoginUserParam, RegisterUserParam},
    service::auth::AuthService,
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};
