use anchor_lang::prelude::*;

#[event]
pub struct AuctionInitialized {
    pub auction: Pubkey,
    pub initializer: Pubkey,
    pub custodian: Pubkey,
    pub auction_id: u64,
    pub end_time: i64,
}

#[event]
pub struct BidPlaced {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub highest_bid: u64,
    pub is_highest: bool,
}

#[event]
pub struct AuctionSettled {
    pub auction: Pubkey,
    pub initializer: Pubkey,
    pub winner: Option<Pubkey>,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct BidRefunded {
    pub auction: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
