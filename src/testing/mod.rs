
pub use ports::{FakeIconResizer, MockRepositoryFs};
