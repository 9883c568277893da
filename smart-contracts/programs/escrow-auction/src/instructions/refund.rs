use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::constants::{AUCTION_SEED, BID_SEED};
use crate::controller::AuctionController;
use crate::errors::AuctionError;
use crate::events::BidRefunded;
use crate::instructions::utils::load_bid_record;
use crate::ledger::SystemLedger;
use crate::state::AuctionState;

#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(
        mut,
        seeds = [
            AUCTION_SEED,
            auction_state.initializer.as_ref(),
            &auction_state.auction_id.to_le_bytes()
        ],
        bump = auction_state.bump,
        has_one = custodian @ AuctionError::BadCustodian
    )]
    pub auction_state: Account<'info, AuctionState>,

    /// Releases the refunded bid. The runtime rejects the transfer if it
    /// would leave this account non-empty but below rent exemption.
    #[account(mut)]
    pub custodian: Signer<'info>,

    #[account(mut)]
    pub bidder: Signer<'info>,

    /// CHECK: derived from auction and bidder; left empty when the bidder never bid
    #[account(
        mut,
        seeds = [BID_SEED, auction_state.key().as_ref(), bidder.key().as_ref()],
        bump
    )]
    pub bid_record: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Refund>) -> Result<()> {
    let clock = Clock::get()?;
    let bidder = ctx.accounts.bidder.key();
    let custodian = ctx.accounts.custodian.key();
    let mut record = load_bid_record(&ctx.accounts.bid_record)?;

    let mut ledger = SystemLedger::new(
        ctx.accounts.system_program.to_account_info(),
        vec![
            ctx.accounts.custodian.to_account_info(),
            ctx.accounts.bidder.to_account_info(),
        ],
    );
    let amount = AuctionController::new(&mut ledger, clock.unix_timestamp).refund(
        &mut ctx.accounts.auction_state,
        record.as_deref_mut(),
        &bidder,
        &custodian,
    )?;

    if let Some(record) = &record {
        record.exit(&crate::ID)?;
    }

    let state = &ctx.accounts.auction_state;
    msg!(
        "Refunded {} lamports to {}, {} lamports still locked",
        amount,
        bidder,
        state.outstanding()
    );

    emit!(BidRefunded {
        auction: state.key(),
        bidder,
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
