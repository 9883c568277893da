pub mod end_auction;
pub mod initialize;
pub mod place_bid;
pub mod refund;
pub mod utils;

pub use end_auction::*;
pub use initialize::*;
pub use place_bid::*;
pub use refund::*;
