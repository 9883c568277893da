use anchor_lang::prelude::*;

pub mod constants;
pub mod controller;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use instructions::*;

declare_id!("JBG6TstKsPcqrxSvv8fjHnrYbPKPtNEGmafngEikUWzT");

#[program]
pub mod escrow_auction {
    use super::*;

    /// Open a new auction. `end_time` must be in the future; bids are
    /// locked with `custodian` until settlement.
    pub fn initialize(ctx: Context<Initialize>, auction_id: u64, end_time: i64) -> Result<()> {
        instructions::initialize::handler(ctx, auction_id, end_time)
    }

    /// Lock `amount` lamports with the custodian. One bid per bidder.
    pub fn bid(ctx: Context<PlaceBid>, amount: u64) -> Result<()> {
        instructions::place_bid::handler(ctx, amount)
    }

    /// After the bidding window closes, the seller claims the highest bid
    pub fn end_auction(ctx: Context<EndAuction>) -> Result<()> {
        instructions::end_auction::handler(ctx)
    }

    /// After settlement, losing bidders take their locked amount back
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
