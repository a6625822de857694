use crate::error::AppError;
use crate::model::logging::LogEvent;
use crate::service::logging::LoggingService;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod apply_selection;
mod settings;
