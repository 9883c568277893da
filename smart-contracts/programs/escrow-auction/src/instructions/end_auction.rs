use anchor_lang::prelude::*;

use crate::constants::AUCTION_SEED;
use crate::controller::AuctionController;
use crate::errors::AuctionError;
use crate::events::AuctionSettled;
use crate::ledger::SystemLedger;
use crate::state::AuctionState;

#[derive(Accounts)]
pub struct EndAuction<'info> {
    #[account(
        mut,
        seeds = [
            AUCTION_SEED,
            auction_state.initializer.as_ref(),
            &auction_state.auction_id.to_le_bytes()
        ],
        bump = auction_state.bump,
        has_one = initializer @ AuctionError::Unauthorized,
        has_one = custodian @ AuctionError::BadCustodian
    )]
    pub auction_state: Account<'info, AuctionState>,

    /// Releases the winning bid. The runtime rejects the transfer if it
    /// would leave this account non-empty but below rent exemption.
    #[account(mut)]
    pub custodian: Signer<'info>,

    #[account(mut)]
    pub initializer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EndAuction>) -> Result<()> {
    let clock = Clock::get()?;
    let initializer = ctx.accounts.initializer.key();
    let custodian = ctx.accounts.custodian.key();

    let mut ledger = SystemLedger::new(
        ctx.accounts.system_program.to_account_info(),
        vec![
            ctx.accounts.custodian.to_account_info(),
            ctx.accounts.initializer.to_account_info(),
        ],
    );
    let payout = AuctionController::new(&mut ledger, clock.unix_timestamp).end_auction(
        &mut ctx.accounts.auction_state,
        &initializer,
        &custodian,
    )?;

    let state = &ctx.accounts.auction_state;
    msg!(
        "Auction {} settled: {} lamports paid to {}, {} lamports left for refunds",
        state.auction_id,
        payout,
        initializer,
        state.outstanding()
    );

    emit!(AuctionSettled {
        auction: state.key(),
        initializer,
        winner: state.highest_bidder,
        amount: payout,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
