use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Balance-holding substrate the controller moves funds through.
pub trait Ledger {
    fn balance(&self, account: &Pubkey) -> Result<u64>;

    /// Moves `amount` from one account to another. Fails without side
    /// effects when `from` cannot cover it.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Lamport ledger backed by System Program transfers. Every account that
/// takes part in a transfer must be handed in up front, and debited
/// accounts must have signed the transaction.
pub struct SystemLedger<'info> {
    system_program: AccountInfo<'info>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> SystemLedger<'info> {
    pub fn new(system_program: AccountInfo<'info>, accounts: Vec<AccountInfo<'info>>) -> Self {
        Self {
            system_program,
            accounts,
        }
    }

    fn account(&self, key: &Pubkey) -> Result<&AccountInfo<'info>> {
        self.accounts
            .iter()
            .find(|info| info.key == key)
            .ok_or_else(|| error!(ErrorCode::AccountNotEnoughKeys))
    }
}

impl<'info> Ledger for SystemLedger<'info> {
    fn balance(&self, account: &Pubkey) -> Result<u64> {
        Ok(self.account(account)?.lamports())
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let accounts = Transfer {
            from: self.account(from)?.clone(),
            to: self.account(to)?.clone(),
        };
        let cpi_ctx = CpiContext::new(self.system_program.clone(), accounts);
        system_program::transfer(cpi_ctx, amount)
    }
}
