use crate::data::item_stats::ItemStatsRepository;
use crate::model::stats::ItemTotals;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
