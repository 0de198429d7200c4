mod assert;

pub mod slice;
pub mod str;

pub mod prelude {
    pub use crate::{
        assert_empty, assert_err, assert_none, assert_ok, assert_some, assert_unique,
        slice::SliceUtil,
    };
}
