use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::{AUCTION_SEED, BID_SEED};
use crate::controller::{AuctionController, BidSlot};
use crate::errors::AuctionError;
use crate::events::BidPlaced;
use crate::instructions::utils::{create_bid_record, is_bid_record_occupied};
use crate::ledger::SystemLedger;
use crate::state::{AuctionState, BidRecord};

#[derive(Accounts)]
pub struct PlaceBid<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,

    #[account(
        mut,
        seeds = [
            AUCTION_SEED,
            auction_state.initializer.as_ref(),
            &auction_state.auction_id.to_le_bytes()
        ],
        bump = auction_state.bump
    )]
    pub auction_state: Account<'info, AuctionState>,

    /// Receives the bid amount. While empty, the runtime rejects a first
    /// bid below the rent-exempt minimum.
    /// CHECK: must be the custodian pinned at initialization
    #[account(
        mut,
        constraint = custodian.key() == auction_state.custodian @ AuctionError::BadCustodian
    )]
    pub custodian: UncheckedAccount<'info>,

    /// One record per bidder per auction, created by the handler
    /// CHECK: derived from auction and bidder; existing data means the bidder already bid
    #[account(
        mut,
        seeds = [BID_SEED, auction_state.key().as_ref(), bidder.key().as_ref()],
        bump
    )]
    pub bid_record: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let auction = ctx.accounts.auction_state.key();
    let bidder = ctx.accounts.bidder.key();
    let custodian = ctx.accounts.custodian.key();
    let slot = BidSlot {
        bump: *ctx.bumps.get("bid_record").ok_or(ErrorCode::ConstraintSeeds)?,
        occupied: is_bid_record_occupied(&ctx.accounts.bid_record),
        rent: Rent::get()?.minimum_balance(BidRecord::LEN),
    };

    let mut ledger = SystemLedger::new(
        ctx.accounts.system_program.to_account_info(),
        vec![
            ctx.accounts.bidder.to_account_info(),
            ctx.accounts.custodian.to_account_info(),
        ],
    );
    let record = AuctionController::new(&mut ledger, clock.unix_timestamp).bid(
        &mut ctx.accounts.auction_state,
        auction,
        bidder,
        &custodian,
        amount,
        slot,
    )?;
    create_bid_record(
        &ctx.accounts.bid_record,
        &ctx.accounts.bidder,
        &ctx.accounts.system_program,
        &record,
        slot.rent,
    )?;

    let state = &ctx.accounts.auction_state;
    emit!(BidPlaced {
        auction,
        bidder,
        amount,
        highest_bid: state.highest_bid,
        is_highest: state.is_winner(&bidder),
    });

    Ok(())
}
