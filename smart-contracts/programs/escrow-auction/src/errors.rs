use anchor_lang::prelude::*;

#[error_code]
pub enum AuctionError {
    #[msg("Auction is active")]
    AuctionActive,

    #[msg("Auction is inactive")]
    AuctionInactive,

    #[msg("Auction already ended")]
    AuctionAlreadyEnded,

    #[msg("Auction has not ended yet")]
    AuctionNotEnded,

    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Bid amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient funds to place bid")]
    InsufficientFunds,

    #[msg("Custodian does not match the auction")]
    BadCustodian,

    #[msg("Bidder has already placed a bid in this auction")]
    DuplicateBid,

    #[msg("No bid found for this bidder")]
    NoSuchBid,

    #[msg("Bidder has already claimed their refund")]
    AlreadyRefunded,

    #[msg("Winning bid cannot be refunded")]
    WinnerCannotRefund,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Released funds would exceed the amount locked in the auction")]
    ReleaseExceedsLocked,
}

/// Broad failure classes callers can branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operation attempted outside its valid phase.
    Temporal,
    /// Signer is not the required party.
    Authorization,
    /// Funds, amounts or account references are wrong.
    Resource,
    /// Second bid or second refund for the same participant.
    Duplication,
}

impl AuctionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuctionError::AuctionActive
            | AuctionError::AuctionInactive
            | AuctionError::AuctionAlreadyEnded
            | AuctionError::AuctionNotEnded => ErrorCategory::Temporal,
            AuctionError::Unauthorized | AuctionError::WinnerCannotRefund => {
                ErrorCategory::Authorization
            }
            AuctionError::InvalidAmount
            | AuctionError::InsufficientFunds
            | AuctionError::BadCustodian
            | AuctionError::NoSuchBid
            | AuctionError::Overflow
            | AuctionError::ReleaseExceedsLocked => ErrorCategory::Resource,
            AuctionError::DuplicateBid | AuctionError::AlreadyRefunded => {
                ErrorCategory::Duplication
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_cover_taxonomy() {
        assert_eq!(AuctionError::AuctionInactive.category(), ErrorCategory::Temporal);
        assert_eq!(AuctionError::AuctionAlreadyEnded.category(), ErrorCategory::Temporal);
        assert_eq!(AuctionError::Unauthorized.category(), ErrorCategory::Authorization);
        assert_eq!(AuctionError::BadCustodian.category(), ErrorCategory::Resource);
        assert_eq!(AuctionError::InsufficientFunds.category(), ErrorCategory::Resource);
        assert_eq!(AuctionError::ReleaseExceedsLocked.category(), ErrorCategory::Resource);
        assert_eq!(AuctionError::DuplicateBid.category(), ErrorCategory::Duplication);
        assert_eq!(AuctionError::AlreadyRefunded.category(), ErrorCategory::Duplication);
    }

    #[test]
    fn codes_start_at_anchor_offset() {
        let code: u32 = AuctionError::AuctionActive.into();
        assert_eq!(code, 6000);
        let code: u32 = AuctionError::WinnerCannotRefund.into();
        assert_eq!(code, 6011);
        let code: u32 = AuctionError::ReleaseExceedsLocked.into();
        assert_eq!(code, 6013);
    }
}
