multiversx_sc::imports!();

use crate::types::ProposalStatus;

/// Log entries for indexers. Every state change of the vault emits one.
#[multiversx_sc::module]
pub trait EventsModule {
    // ── Share ledger ──

    #[event("deposited")]
    fn deposited_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        units: &BigUint,
    );

    #[event("withdrawn")]
    fn withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] units: &BigUint,
        amount: &BigUint,
    );

    // ── Rewards ──

    #[event("rewardClaimed")]
    fn reward_claimed_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("rewardRateUpdated")]
    fn reward_rate_updated_event(&self, #[indexed] timestamp: u64, rate: &BigUint);

    #[event("rewardsFunded")]
    fn rewards_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    // ── Governance ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] deadline: u64,
        quorum_fraction: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(&self, #[indexed] proposal_id: u64, outcome: ProposalStatus);

    #[event("proposalEffectApplied")]
    fn proposal_effect_applied_event(&self, #[indexed] proposal_id: u64);

    #[event("proposalEffectFailed")]
    fn proposal_effect_failed_event(&self, #[indexed] proposal_id: u64, reason: &ManagedBuffer);

    // ── Account registry ──

    #[event("authorizationChanged")]
    fn authorization_changed_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] by: &ManagedAddress,
        authorized: bool,
    );

    #[event("roleChanged")]
    fn role_changed_event(&self, #[indexed] account: &ManagedAddress, roles: u8);
}
