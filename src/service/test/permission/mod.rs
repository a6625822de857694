use crate::error::{auth::AuthError, AppError};
use crate::model::permission::{CommandAccess, Invoker};
use crate::service::permission::PermissionService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod can_use_admin_commands;

const OWNER_ID: u64 = 1;
const GUILD_ID: u64 = 100;

fn invoker(user_id: u64, is_administrator: bool) -> Invoker {
    Invoker {
        user_id,
        guild_id: Some(GUILD_ID),
        is_administrator,
    }
}

fn denial(result: Result<(), AppError>) -> Option<AuthError> {
    match result {
        Err(AppError::AuthErr(err)) => Some(err),
        _ => None,
    }
}
