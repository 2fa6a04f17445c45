use smeta_test_utils::prelude::*;

use crate::data::view::ViewRepository;

mod create;
mod next_sort_order;
