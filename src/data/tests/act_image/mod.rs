use smeta_test_utils::prelude::*;

use crate::{data::act_image::ActImageRepository, model::act::ActImageType};

mod upsert;
