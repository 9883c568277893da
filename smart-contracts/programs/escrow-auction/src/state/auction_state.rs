use anchor_lang::prelude::*;

use crate::constants::{AUCTION_SEED, DISCRIMINATOR_LEN};
use crate::errors::AuctionError;

/// Parameters an auction is opened with.
#[derive(Clone, Copy, Debug)]
pub struct AuctionConfig {
    pub auction_id: u64,
    pub end_time: i64,
    pub initializer: Pubkey,
    pub custodian: Pubkey,
    pub bump: u8,
}

/// Lifecycle phase, derived from the stored fields and the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionPhase {
    /// Accepting bids.
    Active,
    /// Bidding window has passed, seller has not claimed yet.
    Closed,
    /// Seller has claimed the highest bid; refunds are open.
    Settled,
}

#[account]
#[derive(Default, Debug)]
pub struct AuctionState {
    /// Seller; the only account paid at settlement
    pub initializer: Pubkey,

    /// Account holding every locked bid for this auction
    pub custodian: Pubkey,

    /// Caller-chosen id, part of the state address
    pub auction_id: u64,

    /// Unix timestamp at which bidding closes
    pub end_time: i64,

    pub created_at: i64,

    /// Largest amount recorded so far, 0 before the first bid
    pub highest_bid: u64,

    pub highest_bidder: Option<Pubkey>,

    /// Set once by settlement
    pub ended: bool,

    pub bid_count: u32,

    /// Sum of every successful bid
    pub total_locked: u64,

    /// Sum paid out of the custodian by settlement and refunds
    pub total_released: u64,

    pub bump: u8,
}

impl AuctionState {
    pub const LEN: usize = DISCRIMINATOR_LEN +
        32 + // initializer
        32 + // custodian
        8 +  // auction_id
        8 +  // end_time
        8 +  // created_at
        8 +  // highest_bid
        33 + // highest_bidder (Option<Pubkey>)
        1 +  // ended
        4 +  // bid_count
        8 +  // total_locked
        8 +  // total_released
        1;   // bump

    /// Fills a freshly created state record. Bidding must close after `now`.
    pub fn initialize(&mut self, config: AuctionConfig, now: i64) -> Result<()> {
        require!(config.end_time > now, AuctionError::AuctionInactive);

        *self = AuctionState {
            initializer: config.initializer,
            custodian: config.custodian,
            auction_id: config.auction_id,
            end_time: config.end_time,
            created_at: now,
            highest_bid: 0,
            highest_bidder: None,
            ended: false,
            bid_count: 0,
            total_locked: 0,
            total_released: 0,
            bump: config.bump,
        };
        Ok(())
    }

    pub fn address(initializer: &Pubkey, auction_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[AUCTION_SEED, initializer.as_ref(), &auction_id.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn phase(&self, now: i64) -> AuctionPhase {
        if self.ended {
            AuctionPhase::Settled
        } else if now < self.end_time {
            AuctionPhase::Active
        } else {
            AuctionPhase::Closed
        }
    }

    pub fn is_winner(&self, bidder: &Pubkey) -> bool {
        self.highest_bidder.as_ref() == Some(bidder)
    }

    /// Custodian balance still attributable to this auction.
    pub fn outstanding(&self) -> u64 {
        self.total_locked.saturating_sub(self.total_released)
    }

    /// Folds an accepted bid into the running maximum and totals.
    /// Ties keep the earlier bidder.
    pub fn record_bid(&mut self, bidder: Pubkey, amount: u64) -> Result<bool> {
        self.total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;
        self.bid_count = self
            .bid_count
            .checked_add(1)
            .ok_or(AuctionError::Overflow)?;

        let is_highest = amount > self.highest_bid;
        if is_highest {
            self.highest_bid = amount;
            self.highest_bidder = Some(bidder);
        }
        Ok(is_highest)
    }

    pub fn record_release(&mut self, amount: u64) -> Result<()> {
        let total_released = self
            .total_released
            .checked_add(amount)
            .ok_or(AuctionError::Overflow)?;
        require!(
            total_released <= self.total_locked,
            AuctionError::ReleaseExceedsLocked
        );
        self.total_released = total_released;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(end_time: i64) -> AuctionState {
        AuctionState {
            initializer: Pubkey::new_unique(),
            custodian: Pubkey::new_unique(),
            end_time,
            ..AuctionState::default()
        }
    }

    #[test]
    fn phase_follows_clock_and_flag() {
        let mut state = auction(100);
        assert_eq!(state.phase(99), AuctionPhase::Active);
        assert_eq!(state.phase(100), AuctionPhase::Closed);
        assert_eq!(state.phase(1_000), AuctionPhase::Closed);

        state.ended = true;
        assert_eq!(state.phase(0), AuctionPhase::Settled);
        assert_eq!(state.phase(1_000), AuctionPhase::Settled);
    }

    #[test]
    fn highest_bid_is_order_independent() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        let mut first = auction(100);
        first.record_bid(a, 50).unwrap();
        first.record_bid(b, 1).unwrap();

        let mut second = auction(100);
        second.record_bid(b, 1).unwrap();
        second.record_bid(a, 50).unwrap();

        for state in [&first, &second] {
            assert_eq!(state.highest_bid, 50);
            assert_eq!(state.highest_bidder, Some(a));
            assert_eq!(state.total_locked, 51);
            assert_eq!(state.bid_count, 2);
        }
    }

    #[test]
    fn equal_bid_keeps_first_bidder() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let mut state = auction(100);

        assert!(state.record_bid(a, 10).unwrap());
        assert!(!state.record_bid(b, 10).unwrap());
        assert!(state.is_winner(&a));
        assert!(!state.is_winner(&b));
    }

    fn config(end_time: i64) -> AuctionConfig {
        AuctionConfig {
            auction_id: 1,
            end_time,
            initializer: Pubkey::new_unique(),
            custodian: Pubkey::new_unique(),
            bump: 255,
        }
    }

    #[test]
    fn initialize_rejects_past_or_present_end_time() {
        for end_time in [99, 100] {
            let mut state = AuctionState::default();
            let err = state.initialize(config(end_time), 100).unwrap_err();
            assert_eq!(err, AuctionError::AuctionInactive.into());
            assert_eq!(state.initializer, Pubkey::default());
        }
    }

    #[test]
    fn initialize_sets_fresh_state() {
        let mut state = AuctionState::default();
        let config = config(102);
        state.initialize(config, 100).unwrap();

        assert_eq!(state.initializer, config.initializer);
        assert_eq!(state.custodian, config.custodian);
        assert_eq!(state.end_time, 102);
        assert_eq!(state.created_at, 100);
        assert_eq!(state.highest_bid, 0);
        assert_eq!(state.highest_bidder, None);
        assert!(!state.ended);
        assert_eq!(state.phase(100), AuctionPhase::Active);
    }

    #[test]
    fn release_cannot_exceed_locked() {
        let mut state = auction(100);
        state.record_bid(Pubkey::new_unique(), 5).unwrap();
        state.record_release(3).unwrap();
        assert_eq!(state.outstanding(), 2);

        let err = state.record_release(3).unwrap_err();
        assert_eq!(err, AuctionError::ReleaseExceedsLocked.into());
        assert_eq!(state.total_released, 3);
    }

    #[test]
    fn len_matches_serialized_size() {
        let mut state = auction(100);
        state.highest_bidder = Some(Pubkey::new_unique());
        let bytes = state.try_to_vec().unwrap();
        assert_eq!(bytes.len() + DISCRIMINATOR_LEN, AuctionState::LEN);
    }
}
