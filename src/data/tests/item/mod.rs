use rust_decimal::Decimal;
use smeta_test_utils::prelude::*;

use crate::{data::item::ItemRepository, model::estimate::ItemDto};

mod create;
mod get_many_by_estimate_id;
