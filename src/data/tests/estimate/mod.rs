use smeta_test_utils::{constant::TEST_OWNER_ID, prelude::*};

use crate::{data::estimate::EstimateRepository, model::estimate::EstimateDto};

mod create;
mod delete;
mod update;
