#![no_std]

multiversx_sc::imports!();

pub mod collaborator_mock_proxy;

pub const ERR_EFFECT_REFUSED: &str = "EffectRefused";

/// Stand-in for both external collaborators of the vault: answers
/// `isAuthorized` from verdicts set by the test, and applies or refuses
/// passed proposals on `applyProposal`.
#[multiversx_sc::contract]
pub trait CollaboratorMock {
    #[init]
    fn init(&self) {}

    // ── Compliance registry ──

    #[endpoint(setVerdict)]
    fn set_verdict(&self, identity: ManagedAddress, authorized: bool) {
        self.verdict(&identity).set(authorized);
    }

    #[view(isAuthorized)]
    fn is_authorized(&self, identity: ManagedAddress) -> bool {
        self.verdict(&identity).get()
    }

    // ── Proposal effect handler ──

    #[endpoint(setRefuseProposals)]
    fn set_refuse_proposals(&self, refuse: bool) {
        self.refuse_proposals().set(refuse);
    }

    #[endpoint(applyProposal)]
    fn apply_proposal(&self, proposal_id: u64) {
        require!(!self.refuse_proposals().get(), ERR_EFFECT_REFUSED);
        self.applied(proposal_id).set(true);
    }

    #[view(isApplied)]
    fn is_applied(&self, proposal_id: u64) -> bool {
        self.applied(proposal_id).get()
    }

    #[storage_mapper("verdict")]
    fn verdict(&self, identity: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("refuseProposals")]
    fn refuse_proposals(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("applied")]
    fn applied(&self, proposal_id: u64) -> SingleValueMapper<bool>;
}
