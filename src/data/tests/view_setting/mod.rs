use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use smeta_test_utils::prelude::*;

use crate::data::view_setting::{ItemSetting, ViewSettingRepository};

mod insert_if_absent;
mod upsert_item;
mod upsert_section;
