use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::BID_SEED;
use crate::state::BidRecord;

/// Loads a bid record that may never have been created. An address the
/// program does not own, or one without data, means the bidder never bid.
pub fn load_bid_record<'info>(info: &AccountInfo<'info>) -> Result<Option<Account<'info, BidRecord>>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    Account::<BidRecord>::try_from(info).map(Some)
}

pub fn is_bid_record_occupied(info: &AccountInfo) -> bool {
    info.owner == &crate::ID && !info.data_is_empty()
}

/// Creates `record` at its derived address, funded by the bidder.
/// A system account that already holds lamports there is topped up,
/// allocated and assigned instead.
pub fn create_bid_record<'info>(
    bid_record: &AccountInfo<'info>,
    bidder: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    record: &BidRecord,
    rent: u64,
) -> Result<()> {
    let space = BidRecord::LEN as u64;
    let bump = [record.bump];
    let seeds: &[&[u8]] = &[
        BID_SEED,
        record.auction.as_ref(),
        record.bidder.as_ref(),
        &bump,
    ];
    let signer = &[seeds];

    let current = bid_record.lamports();
    if current == 0 {
        let accounts = CreateAccount {
            from: bidder.clone(),
            to: bid_record.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), accounts, signer);
        system_program::create_account(cpi_ctx, rent, space, &crate::ID)?;
    } else {
        let top_up = rent.saturating_sub(current);
        if top_up > 0 {
            let accounts = Transfer {
                from: bidder.clone(),
                to: bid_record.clone(),
            };
            system_program::transfer(CpiContext::new(system_program.clone(), accounts), top_up)?;
        }

        let accounts = Allocate {
            account_to_allocate: bid_record.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), accounts, signer);
        system_program::allocate(cpi_ctx, space)?;

        let accounts = Assign {
            account_to_assign: bid_record.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), accounts, signer);
        system_program::assign(cpi_ctx, &crate::ID)?;
    }

    let mut data = bid_record.try_borrow_mut_data()?;
    record.try_serialize(&mut &mut data[..])?;
    Ok(())
}
