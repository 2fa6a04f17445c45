pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::estimate::{factory, LegacyPricing},
        test_setup_with_schema, test_setup_with_tables, TestError, TestSetup,
    };
}
