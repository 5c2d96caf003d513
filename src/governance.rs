multiversx_sc::imports!();

use crate::{
    account_registry::{self, ROLE_PROPOSER},
    errors::{
        ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_INSUFFICIENT_UNITS, ERR_INVALID_DURATION,
        ERR_INVALID_QUORUM, ERR_PROPOSAL_NOT_FOUND, ERR_UNAUTHORIZED, ERR_VOTING_CLOSED,
        ERR_VOTING_STILL_ACTIVE,
    },
    events, proposal_effect_proxy, share_ledger,
    types::{Proposal, ProposalEffectResult, ProposalStatus},
};

const MAX_QUORUM_FRACTION: u64 = 100;

/// Stake-weighted voting over the share ledger. Reads unit balances as
/// voting weight, never mutates them.
#[multiversx_sc::module]
pub trait GovernanceModule:
    account_registry::AccountRegistryModule + share_ledger::ShareLedgerModule + events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Authorized holders of the proposer role only. Voting
    // opens immediately and closes after `voting_duration`.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        quorum_fraction: u64,
        voting_duration: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);
        require!(self.has_role(&caller, ROLE_PROPOSER), ERR_UNAUTHORIZED);
        require!(
            quorum_fraction > 0 && quorum_fraction <= MAX_QUORUM_FRACTION,
            ERR_INVALID_QUORUM
        );
        require!(voting_duration > 0, ERR_INVALID_DURATION);

        let now = self.blockchain().get_block_timestamp();
        let voting_deadline = now.saturating_add(voting_duration);
        let proposal_id = self.proposal_count().get() + 1;

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller,
            description,
            created_at: now,
            voting_deadline,
            for_weight: BigUint::zero(),
            against_weight: BigUint::zero(),
            quorum_fraction,
            status: ProposalStatus::Voting,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, voting_deadline, quorum_fraction);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per identity, weighted by the live unit balance.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        self.require_authorized(&caller);

        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.status == ProposalStatus::Voting && now <= proposal.voting_deadline,
            ERR_VOTING_CLOSED
        );
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        let weight = self.units(&caller).get();
        require!(weight > 0u64, ERR_INSUFFICIENT_UNITS);

        if support {
            proposal.for_weight += &weight;
        } else {
            proposal.against_weight += &weight;
        }

        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_cast_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Anyone can finalize once the window has closed.
    // Voting → Expired (no quorum) | Passed | Rejected.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        let mut proposal = self.require_proposal(proposal_id);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let now = self.blockchain().get_block_timestamp();
        require!(now > proposal.voting_deadline, ERR_VOTING_STILL_ACTIVE);

        let required = self.quorum_requirement(proposal.quorum_fraction);
        let outcome = if proposal.total_weight() < required {
            ProposalStatus::Expired
        } else if proposal.for_weight > proposal.against_weight {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        };

        proposal.status = outcome;
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        self.proposal_finalized_event(proposal_id, outcome);

        if outcome == ProposalStatus::Passed && !self.proposal_effect_handler().is_empty() {
            self.dispatch_proposal_effect(proposal_id);
        }
    }

    #[only_owner]
    #[endpoint(setProposalEffectHandler)]
    fn set_proposal_effect_handler(&self, handler: ManagedAddress) {
        self.proposal_effect_handler().set(&handler);
    }

    #[only_owner]
    #[endpoint(clearProposalEffectHandler)]
    fn clear_proposal_effect_handler(&self) {
        self.proposal_effect_handler().clear();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    /// `quorum_fraction` percent of the current total units, rounded down.
    fn quorum_requirement(&self, quorum_fraction: u64) -> BigUint {
        BigUint::from(quorum_fraction) * self.total_units().get()
            / BigUint::from(MAX_QUORUM_FRACTION)
    }

    /// The tally is already committed; the handler's outcome is only reported.
    fn dispatch_proposal_effect(&self, proposal_id: u64) {
        let handler = self.proposal_effect_handler().get();
        self.proposal_effect_result(proposal_id)
            .set(ProposalEffectResult::Pending);

        self.tx()
            .to(&handler)
            .typed(proposal_effect_proxy::ProposalEffectProxy)
            .apply_proposal(proposal_id)
            .callback(self.callbacks().proposal_effect_callback(proposal_id))
            .async_call_and_exit();
    }

    #[callback]
    fn proposal_effect_callback(
        &self,
        proposal_id: u64,
        #[call_result] result: ManagedAsyncCallResult<()>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(()) => {
                self.proposal_effect_result(proposal_id)
                    .set(ProposalEffectResult::Applied);
                self.proposal_effect_applied_event(proposal_id);
            }
            ManagedAsyncCallResult::Err(err) => {
                self.proposal_effect_result(proposal_id)
                    .set(ProposalEffectResult::Failed);
                self.proposal_effect_failed_event(proposal_id, &err.err_msg);
            }
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            if !self.proposals(id).is_empty() {
                result.push(self.proposals(id).get());
            }
        }
        result
    }

    /// Proposals still accepting votes.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        for id in 1..=total {
            if self.proposals(id).is_empty() {
                continue;
            }
            let proposal = self.proposals(id).get();
            if proposal.status == ProposalStatus::Voting && now <= proposal.voting_deadline {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getQuorumRequirement)]
    fn get_quorum_requirement(&self, proposal_id: u64) -> BigUint {
        let proposal = self.require_proposal(proposal_id);
        self.quorum_requirement(proposal.quorum_fraction)
    }

    #[view(getProposalEffectResult)]
    fn get_proposal_effect_result(&self, proposal_id: u64) -> ProposalEffectResult {
        if self.proposal_effect_result(proposal_id).is_empty() {
            return ProposalEffectResult::None;
        }
        self.proposal_effect_result(proposal_id).get()
    }

    #[view(hasVoted)]
    fn has_account_voted(&self, proposal_id: u64, account: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("proposalEffectResult")]
    fn proposal_effect_result(&self, proposal_id: u64) -> SingleValueMapper<ProposalEffectResult>;

    #[view(getProposalEffectHandler)]
    #[storage_mapper("proposalEffectHandler")]
    fn proposal_effect_handler(&self) -> SingleValueMapper<ManagedAddress>;
}
