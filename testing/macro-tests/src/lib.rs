//! Row types declared through `#[derive(Row)]`, exercised against the
//! runtime mapper.


pub mod prelude {
    pub use cellmap::{
        obs::CollectingSink,
        prelude::*,
    };
    pub use std::sync::Arc;
}
