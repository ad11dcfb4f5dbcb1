mod clock;
mod generate;
mod planner;
mod pool;
mod repository;
mod storage;

pub use clock::*;
pub use generate::*;
pub use planner::*;
pub use pool::*;
pub use repository::*;
pub use storage::*;
