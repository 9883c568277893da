use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::constants::AUCTION_SEED;
use crate::events::AuctionInitialized;
use crate::state::{AuctionConfig, AuctionState};

#[derive(Accounts)]
#[instruction(auction_id: u64)]
pub struct Initialize<'info> {
    /// Seller; pays for the state account and receives the winning bid
    #[account(mut)]
    pub initializer: Signer<'info>,

    #[account(
        init,
        payer = initializer,
        space = AuctionState::LEN,
        seeds = [AUCTION_SEED, initializer.key().as_ref(), &auction_id.to_le_bytes()],
        bump
    )]
    pub auction_state: Account<'info, AuctionState>,

    /// Account that will hold the locked bids
    /// CHECK: pinned into the auction state and compared on every later instruction
    pub custodian: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, auction_id: u64, end_time: i64) -> Result<()> {
    let clock = Clock::get()?;
    let config = AuctionConfig {
        auction_id,
        end_time,
        initializer: ctx.accounts.initializer.key(),
        custodian: ctx.accounts.custodian.key(),
        bump: *ctx
            .bumps
            .get("auction_state")
            .ok_or(ErrorCode::ConstraintSeeds)?,
    };

    ctx.accounts
        .auction_state
        .initialize(config, clock.unix_timestamp)?;

    msg!(
        "Auction {} initialized by {}, bidding closes at {}",
        auction_id,
        config.initializer,
        end_time
    );

    emit!(AuctionInitialized {
        auction: ctx.accounts.auction_state.key(),
        initializer: config.initializer,
        custodian: config.custodian,
        auction_id,
        end_time,
    });

    Ok(())
}
