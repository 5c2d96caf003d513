multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window is open. Authorized holders can vote for/against.
    Voting,
    /// Quorum reached and for > against. Terminal.
    Passed,
    /// Quorum reached but for <= against. Terminal.
    Rejected,
    /// Voting window closed without quorum. Terminal.
    Expired,
}

// ============================================================
// Proposal Effect Result — outcome of the effect handler call
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalEffectResult {
    /// No handler call was made for this proposal.
    None,
    /// Handler call dispatched, callback not yet received.
    Pending,
    Applied,
    Failed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub created_at: u64,
    /// Last timestamp at which a vote is still accepted
    pub voting_deadline: u64,
    pub for_weight: BigUint<M>,
    pub against_weight: BigUint<M>,
    /// Percentage (1..=100) of total units that must participate
    pub quorum_fraction: u64,
    pub status: ProposalStatus,
    /// Set once the proposal reached a terminal status
    pub executed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_weight(&self) -> BigUint<M> {
        &self.for_weight + &self.against_weight
    }
}

// ============================================================
// Reward Checkpoint — per-account accrual state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RewardCheckpoint<M: ManagedTypeApi> {
    /// Accumulator value at the account's last interaction
    pub reward_per_unit_paid: BigUint<M>,
    /// Reward owed but not yet claimed
    pub accrued_reward: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for RewardCheckpoint<M> {
    fn default() -> Self {
        RewardCheckpoint {
            reward_per_unit_paid: BigUint::zero(),
            accrued_reward: BigUint::zero(),
        }
    }
}
