use rust_decimal::Decimal;
use smeta_test_utils::prelude::*;

use crate::{
    error::Error,
    service::{version::VersionService, view::ViewService},
};

mod create_version;
mod project_version;
