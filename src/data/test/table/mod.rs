use crate::data::table::TableRepository;
use crate::model::table::ManagedTable;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
