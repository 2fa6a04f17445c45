use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use smeta_test_utils::prelude::*;

use crate::{error::Error, service::view::ViewService};

mod create_view;
mod set_item_override;
mod set_section_visibility;
