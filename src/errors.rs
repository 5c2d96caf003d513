// Error messages returned to the caller. Every failure reverts the whole call.

pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INSUFFICIENT_UNITS: &str = "InsufficientUnits";
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_VOTING_CLOSED: &str = "VotingClosed";
pub const ERR_VOTING_STILL_ACTIVE: &str = "VotingStillActive";
pub const ERR_ALREADY_EXECUTED: &str = "AlreadyExecuted";
pub const ERR_INVALID_QUORUM: &str = "InvalidQuorum";
pub const ERR_NOTHING_TO_CLAIM: &str = "NothingToClaim";
pub const ERR_ASSET_TRANSFER_FAILED: &str = "AssetTransferFailed";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "ProposalNotFound";
pub const ERR_INVALID_DURATION: &str = "InvalidDuration";
pub const ERR_INVALID_ROLE: &str = "InvalidRole";
