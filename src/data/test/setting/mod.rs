use crate::data::setting::SettingRepository;
use crate::model::setting::SettingType;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
