pub mod auction_state;
pub mod bid_record;

pub use auction_state::*;
pub use bid_record::*;
