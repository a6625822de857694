use crate::error::AppError;
use crate::model::setting::{ActivityKind, SettingType, DEFAULT_EMBED_COLOUR, GLOBAL_SCOPE};
use crate::service::customisation::{parse_avatar_url, CustomisationService};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod presence;
