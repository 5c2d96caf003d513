#![no_std]

multiversx_sc::imports!();

pub mod account_registry;
pub mod compliance_registry_proxy;
pub mod errors;
pub mod events;
pub mod governance;
pub mod governed_vault_proxy;
pub mod proposal_effect_proxy;
pub mod reward_accrual;
pub mod share_ledger;
pub mod types;

use errors::ERR_INVALID_AMOUNT;

// ============================================================
// Contract
// ============================================================

/// Pooled vault: deposits mint proportional units, units stream rewards,
/// and unit holders govern through quorum-gated proposals.
///
/// Each endpoint is one atomic transaction. Internal state and events are
/// always written before any outgoing transfer or call.
#[multiversx_sc::contract]
pub trait GovernedVault:
    account_registry::AccountRegistryModule
    + share_ledger::ShareLedgerModule
    + reward_accrual::RewardAccrualModule
    + governance::GovernanceModule
    + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        asset_token: EgldOrEsdtTokenIdentifier,
        reward_token: EgldOrEsdtTokenIdentifier,
        reward_rate: BigUint,
    ) {
        require!(asset_token.is_valid(), "Invalid asset token");
        require!(reward_token.is_valid(), "Invalid reward token");

        self.asset_token().set(&asset_token);
        self.reward_token().set(&reward_token);
        self.reward_rate().set(&reward_rate);
        self.last_update_timestamp()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit (stake)
    // Authorized callers only. Settles rewards on the old
    // balance, then mints units for the payment.
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_authorized(&caller);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.asset_token().get(),
            ERR_INVALID_AMOUNT
        );

        self.update_accumulator();
        self.checkpoint_account(&caller);

        let units = self.mint_units(&caller, &payment.amount);
        self.touch_account(&caller);

        self.deposited_event(&caller, &payment.amount, &units);

        units
    }

    // ========================================================
    // ENDPOINT: withdraw (unstake)
    // Not gated by authorization: a holder can always exit.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, units: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();

        self.update_accumulator();
        self.checkpoint_account(&caller);

        let amount = self.burn_units(&caller, &units);

        self.withdrawn_event(&caller, &units, &amount);

        let asset_token = self.asset_token().get();
        self.send().direct(&caller, &asset_token, 0, &amount);

        amount
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// (totalAssets, totalUnits, accountCount, proposalCount)
    #[view(getLedgerStats)]
    fn get_ledger_stats(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        let total_assets = self.total_assets().get();
        let total_units = self.total_units().get();
        let account_count = self.accounts().len() as u64;
        let proposal_count = self.proposal_count().get();
        (total_assets, total_units, account_count, proposal_count).into()
    }
}
