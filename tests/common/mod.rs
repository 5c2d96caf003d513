#![allow(dead_code)]

use governed_vault::{
    account_registry::{ROLE_COMPLIANCE, ROLE_PROPOSER},
    governed_vault_proxy::GovernedVaultProxy,
    types::{Proposal, ProposalEffectResult},
};
use multiversx_sc_scenario::imports::*;
use vault_collaborator_mock::collaborator_mock_proxy::CollaboratorMockProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const CAROL: TestAddress = TestAddress::new("carol");
pub const DAVE: TestAddress = TestAddress::new("dave");
pub const MALLORY: TestAddress = TestAddress::new("mallory");

pub const VAULT: TestSCAddress = TestSCAddress::new("governed-vault");
pub const CODE_PATH: MxscPath = MxscPath::new("output/governed-vault.mxsc.json");

/// Plays both external collaborators: compliance registry and effect handler.
pub const COLLABORATOR: TestSCAddress = TestSCAddress::new("collaborator");
pub const COLLABORATOR_CODE_PATH: MxscPath =
    MxscPath::new("collaborator-mock/output/vault-collaborator-mock.mxsc.json");

pub const START_BALANCE: u64 = 1_000_000;
pub const START_TIME: u64 = 1_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, governed_vault::ContractBuilder);
    blockchain.register_contract(
        COLLABORATOR_CODE_PATH,
        vault_collaborator_mock::ContractBuilder,
    );
    blockchain
}

/// Vault deployed by OWNER at START_TIME, EGLD as both asset and reward.
/// ALICE, BOB, CAROL and DAVE are authorized; MALLORY is not.
pub struct VaultTestState {
    pub world: ScenarioWorld,
}

impl VaultTestState {
    pub fn new(reward_rate: u64) -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1).balance(START_BALANCE);
        world.account(ALICE).nonce(1).balance(START_BALANCE);
        world.account(BOB).nonce(1).balance(START_BALANCE);
        world.account(CAROL).nonce(1).balance(START_BALANCE);
        world.account(DAVE).nonce(1).balance(START_BALANCE);
        world.account(MALLORY).nonce(1).balance(START_BALANCE);

        world.current_block().block_timestamp(START_TIME);

        world
            .tx()
            .from(OWNER)
            .typed(GovernedVaultProxy)
            .init(
                EgldOrEsdtTokenIdentifier::<StaticApi>::egld(),
                EgldOrEsdtTokenIdentifier::<StaticApi>::egld(),
                reward_rate,
            )
            .code(CODE_PATH)
            .new_address(VAULT)
            .run();

        let mut state = Self { world };
        for account in [ALICE, BOB, CAROL, DAVE] {
            state.authorize(account);
        }
        state
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ── Account registry ──

    pub fn authorize(&mut self, account: TestAddress) {
        self.set_authorized(OWNER, account, true);
    }

    pub fn set_authorized(&mut self, by: TestAddress, account: TestAddress, authorized: bool) {
        self.world
            .tx()
            .from(by)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .set_authorized(account.to_address(), authorized)
            .run();
    }

    pub fn grant_proposer(&mut self, account: TestAddress) {
        self.grant_role(account, ROLE_PROPOSER);
    }

    pub fn grant_compliance(&mut self, account: TestAddress) {
        self.grant_role(account, ROLE_COMPLIANCE);
    }

    pub fn grant_role(&mut self, account: TestAddress, role: u8) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .grant_role(account.to_address(), role)
            .run();
    }

    // ── External collaborators ──

    pub fn deploy_collaborator(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .typed(CollaboratorMockProxy)
            .init()
            .code(COLLABORATOR_CODE_PATH)
            .new_address(COLLABORATOR)
            .run();
    }

    pub fn set_registry_verdict(&mut self, account: TestAddress, authorized: bool) {
        self.world
            .tx()
            .from(OWNER)
            .to(COLLABORATOR)
            .typed(CollaboratorMockProxy)
            .set_verdict(account.to_address(), authorized)
            .run();
    }

    pub fn use_compliance_registry(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .set_compliance_registry(COLLABORATOR.to_address())
            .run();
    }

    pub fn clear_compliance_registry(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .clear_compliance_registry()
            .run();
    }

    pub fn use_effect_handler(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .set_proposal_effect_handler(COLLABORATOR.to_address())
            .run();
    }

    pub fn refuse_proposal_effects(&mut self, refuse: bool) {
        self.world
            .tx()
            .from(OWNER)
            .to(COLLABORATOR)
            .typed(CollaboratorMockProxy)
            .set_refuse_proposals(refuse)
            .run();
    }

    pub fn check_effect_result(&mut self, proposal_id: u64, expected: ProposalEffectResult) {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .get_proposal_effect_result(proposal_id)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_effect_applied(&mut self, proposal_id: u64, expected: bool) {
        self.world
            .query()
            .to(COLLABORATOR)
            .typed(CollaboratorMockProxy)
            .is_applied(proposal_id)
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Share ledger ──

    pub fn deposit(&mut self, from: TestAddress, amount: u64, expected_units: u64) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .deposit()
            .egld(amount)
            .returns(ExpectValue(expected_units))
            .run();
    }

    pub fn deposit_expect_err(&mut self, from: TestAddress, amount: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .deposit()
            .egld(amount)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn withdraw(&mut self, from: TestAddress, units: u64, expected_amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .withdraw(units)
            .returns(ExpectValue(expected_amount))
            .run();
    }

    pub fn withdraw_expect_err(&mut self, from: TestAddress, units: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .withdraw(units)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn check_units(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .get_units(account.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_totals(&mut self, total_assets: u64, total_units: u64) {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .total_assets()
            .returns(ExpectValue(total_assets))
            .run();
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .total_units()
            .returns(ExpectValue(total_units))
            .run();
    }

    // ── Rewards ──

    pub fn fund_rewards(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .fund_rewards()
            .egld(amount)
            .run();
    }

    pub fn claim(&mut self, from: TestAddress, expected_reward: u64) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .claim()
            .returns(ExpectValue(expected_reward))
            .run();
    }

    pub fn claim_expect_err(&mut self, from: TestAddress, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .claim()
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn set_reward_rate(&mut self, rate: u64) {
        self.world
            .tx()
            .from(OWNER)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .set_reward_rate(rate)
            .run();
    }

    pub fn check_earned(&mut self, account: TestAddress, expected: u64) {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .get_earned(account.to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Governance ──

    pub fn create_proposal(
        &mut self,
        from: TestAddress,
        quorum_fraction: u64,
        voting_duration: u64,
        expected_id: u64,
    ) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .create_proposal(
                ManagedBuffer::<StaticApi>::from("raise the reward rate"),
                quorum_fraction,
                voting_duration,
            )
            .returns(ExpectValue(expected_id))
            .run();
    }

    pub fn create_proposal_expect_err(
        &mut self,
        from: TestAddress,
        quorum_fraction: u64,
        voting_duration: u64,
        message: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .create_proposal(
                ManagedBuffer::<StaticApi>::from("raise the reward rate"),
                quorum_fraction,
                voting_duration,
            )
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn vote(&mut self, from: TestAddress, proposal_id: u64, support: bool) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .vote(proposal_id, support)
            .run();
    }

    pub fn vote_expect_err(
        &mut self,
        from: TestAddress,
        proposal_id: u64,
        support: bool,
        message: &str,
    ) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .vote(proposal_id, support)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn execute(&mut self, proposal_id: u64) {
        self.world
            .tx()
            .from(DAVE)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .execute_proposal(proposal_id)
            .run();
    }

    pub fn execute_expect_err(&mut self, proposal_id: u64, message: &str) {
        self.world
            .tx()
            .from(DAVE)
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .execute_proposal(proposal_id)
            .returns(ExpectError(4, message))
            .run();
    }

    pub fn proposal(&mut self, proposal_id: u64) -> Proposal<StaticApi> {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .get_proposal(proposal_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn active_proposal_ids(&mut self) -> Vec<u64> {
        self.world
            .query()
            .to(VAULT)
            .typed(GovernedVaultProxy)
            .get_active_proposals()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .map(|proposal| proposal.id)
            .collect()
    }
}
