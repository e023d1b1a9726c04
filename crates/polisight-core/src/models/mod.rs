pub mod analysis;
pub mod cost;
pub mod household;
pub mod policy;
pub mod token_count;
pub mod transaction;
