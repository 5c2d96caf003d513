mod common;

use common::*;
use governed_vault::governed_vault_proxy::GovernedVaultProxy;
use multiversx_sc_scenario::{api::DebugApi, imports::*};

type VaultContract = governed_vault::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> VaultContract = governed_vault::contract_obj;
}

#[test]
fn init_records_configuration() {
    let mut state = VaultTestState::new(7);

    state
        .world
        .query()
        .to(VAULT)
        .typed(GovernedVaultProxy)
        .asset_token()
        .returns(ExpectValue(EgldOrEsdtTokenIdentifier::<StaticApi>::egld()))
        .run();
    state
        .world
        .query()
        .to(VAULT)
        .typed(GovernedVaultProxy)
        .reward_rate()
        .returns(ExpectValue(7u64))
        .run();
    state.check_totals(0, 0);
}

#[test]
fn ledger_stats_track_activity() {
    let mut state = VaultTestState::new(0);
    state.authorize(OWNER);
    state.grant_proposer(OWNER);
    state.deposit(ALICE, 1_000, 1_000);
    state.deposit(BOB, 500, 500);
    state.create_proposal(OWNER, 10, 60, 1);

    let (total_assets, total_units, account_count, proposal_count) = state
        .world
        .query()
        .to(VAULT)
        .typed(GovernedVaultProxy)
        .get_ledger_stats()
        .returns(ReturnsResult)
        .run()
        .into_tuple();

    assert_eq!(total_assets, 1_500u64);
    assert_eq!(total_units, 1_500u64);
    assert_eq!(account_count, 5);
    assert_eq!(proposal_count, 1);
}
