pub mod builder;
pub mod error;
pub mod fake;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use fake::{ApiCall, Endpoint, FakeApi};
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, ApiCall, Endpoint, FakeApi, TestBuilder, TestError, TestSetup};
}
