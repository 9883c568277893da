use anchor_lang::prelude::*;

use crate::constants::{BID_SEED, DISCRIMINATOR_LEN};

#[account]
#[derive(Default, Debug)]
pub struct BidRecord {
    /// Auction this bid is locked in
    pub auction: Pubkey,

    pub bidder: Pubkey,

    /// Lamports moved to the custodian by this bid
    pub amount: u64,

    /// Cleared by a successful refund
    pub active: bool,

    pub created_at: i64,

    pub refunded_at: Option<i64>,

    pub bump: u8,
}

impl BidRecord {
    pub const LEN: usize = DISCRIMINATOR_LEN +
        32 + // auction
        32 + // bidder
        8 +  // amount
        1 +  // active
        8 +  // created_at
        9 +  // refunded_at (Option<i64>)
        1;   // bump

    /// Deterministic address of a bidder's record within one auction.
    pub fn address(auction: &Pubkey, bidder: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BID_SEED, auction.as_ref(), bidder.as_ref()], &crate::ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_scoped_to_auction_and_bidder() {
        let auction = Pubkey::new_unique();
        let other_auction = Pubkey::new_unique();
        let bidder = Pubkey::new_unique();

        assert_eq!(
            BidRecord::address(&auction, &bidder),
            BidRecord::address(&auction, &bidder)
        );
        assert_ne!(
            BidRecord::address(&auction, &bidder).0,
            BidRecord::address(&other_auction, &bidder).0
        );
        assert_ne!(
            BidRecord::address(&auction, &bidder).0,
            BidRecord::address(&auction, &Pubkey::new_unique()).0
        );
    }

    #[test]
    fn len_matches_serialized_size() {
        let record = BidRecord {
            refunded_at: Some(7),
            ..BidRecord::default()
        };
        let bytes = record.try_to_vec().unwrap();
        assert_eq!(bytes.len() + DISCRIMINATOR_LEN, BidRecord::LEN);
    }
}
