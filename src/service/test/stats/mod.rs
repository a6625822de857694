use crate::service::stats::StatsService;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use std::time::Duration as StdDuration;
use test_utils::{builder::TestBuilder, factory};

mod collect;
