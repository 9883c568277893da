use anchor_lang::prelude::*;

use crate::errors::AuctionError;
use crate::ledger::Ledger;
use crate::state::{AuctionPhase, AuctionState, BidRecord};

/// Derived address of a bidder's record and what creating it costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct BidSlot {
    pub bump: u8,
    /// A record already lives at the address
    pub occupied: bool,
    /// Lamports the bidder pays on top of the bid to create the record
    pub rent: u64,
}

/// Applies the bid and payout transitions against a ledger at a fixed
/// point in time. Each transition validates everything first, then stages
/// the new state, performs the transfer and only then commits, so a
/// failure leaves both the state and the ledger untouched.
pub struct AuctionController<'l, L: Ledger> {
    ledger: &'l mut L,
    now: i64,
}

impl<'l, L: Ledger> AuctionController<'l, L> {
    pub fn new(ledger: &'l mut L, now: i64) -> Self {
        Self { ledger, now }
    }

    /// Locks `amount` with the custodian and returns the bidder's new
    /// record. The caller stores it at the address described by `slot`.
    pub fn bid(
        &mut self,
        state: &mut AuctionState,
        auction: Pubkey,
        bidder: Pubkey,
        custodian: &Pubkey,
        amount: u64,
        slot: BidSlot,
    ) -> Result<BidRecord> {
        require!(
            state.phase(self.now) == AuctionPhase::Active,
            AuctionError::AuctionInactive
        );
        require_keys_eq!(*custodian, state.custodian, AuctionError::BadCustodian);
        require!(amount > 0, AuctionError::InvalidAmount);
        let required = amount
            .checked_add(slot.rent)
            .ok_or(AuctionError::Overflow)?;
        require!(
            self.ledger.balance(&bidder)? >= required,
            AuctionError::InsufficientFunds
        );
        require!(!slot.occupied, AuctionError::DuplicateBid);

        let mut next = state.clone();
        next.record_bid(bidder, amount)?;

        self.ledger.transfer(&bidder, custodian, amount)?;
        *state = next;

        Ok(BidRecord {
            auction,
            bidder,
            amount,
            active: true,
            created_at: self.now,
            refunded_at: None,
            bump: slot.bump,
        })
    }

    /// Pays the highest bid to the initializer and closes the auction.
    /// Returns the amount paid.
    pub fn end_auction(
        &mut self,
        state: &mut AuctionState,
        caller: &Pubkey,
        custodian: &Pubkey,
    ) -> Result<u64> {
        require_keys_eq!(*caller, state.initializer, AuctionError::Unauthorized);
        require_keys_eq!(*custodian, state.custodian, AuctionError::BadCustodian);
        match state.phase(self.now) {
            AuctionPhase::Active => return err!(AuctionError::AuctionActive),
            AuctionPhase::Settled => return err!(AuctionError::AuctionAlreadyEnded),
            AuctionPhase::Closed => {}
        }

        let payout = state.highest_bid;
        let mut next = state.clone();
        next.ended = true;
        if payout > 0 {
            next.record_release(payout)?;
            self.ledger.transfer(custodian, &state.initializer, payout)?;
        }
        *state = next;

        Ok(payout)
    }

    /// Returns a losing bidder's locked amount. `record` is `None` when the
    /// bidder never bid in this auction.
    pub fn refund(
        &mut self,
        state: &mut AuctionState,
        record: Option<&mut BidRecord>,
        bidder: &Pubkey,
        custodian: &Pubkey,
    ) -> Result<u64> {
        match state.phase(self.now) {
            AuctionPhase::Active => return err!(AuctionError::AuctionActive),
            AuctionPhase::Closed => return err!(AuctionError::AuctionNotEnded),
            AuctionPhase::Settled => {}
        }
        require_keys_eq!(*custodian, state.custodian, AuctionError::BadCustodian);

        let record = record.ok_or(AuctionError::NoSuchBid)?;
        require_keys_eq!(record.bidder, *bidder, AuctionError::Unauthorized);
        require!(!state.is_winner(bidder), AuctionError::WinnerCannotRefund);
        require!(record.active, AuctionError::AlreadyRefunded);

        let amount = record.amount;
        let mut next = state.clone();
        next.record_release(amount)?;

        self.ledger.transfer(custodian, bidder, amount)?;
        *state = next;
        record.active = false;
        record.refunded_at = Some(self.now);

        Ok(amount)
    }
}
