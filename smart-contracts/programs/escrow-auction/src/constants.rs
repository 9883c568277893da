/// Seed prefix for the per-auction state account.
pub const AUCTION_SEED: &[u8] = b"auction";

/// Seed prefix for the per-bidder bid record, scoped to one auction.
pub const BID_SEED: &[u8] = b"bid";

/// Anchor account discriminator length.
pub const DISCRIMINATOR_LEN: usize = 8;
