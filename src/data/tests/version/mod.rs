use smeta_test_utils::prelude::*;

use crate::data::version::VersionRepository;

mod create;
mod next_version_number;
