// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod category_repo;
pub mod storage;
pub mod time;
pub mod util;

pub use category_repo::{ContendedCategoryRepo, InMemoryCategoryRepo};
pub use storage::{FailingImageStorage, InMemoryImageStorage};
pub use time::fixed_now;
pub use util::{DummyClock, TickingClock};
