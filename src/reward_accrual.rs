multiversx_sc::imports!();

use crate::{
    errors::{ERR_ASSET_TRANSFER_FAILED, ERR_INVALID_AMOUNT, ERR_NOTHING_TO_CLAIM},
    events, share_ledger,
    types::RewardCheckpoint,
};

/// Fixed-point scale of the reward-per-unit accumulator.
pub const REWARD_SCALE: u64 = 1_000_000_000_000_000_000;

/// Streams `rewardRatePerSecond` to unit holders pro rata without ever
/// iterating over them: a global reward-per-unit accumulator advances with
/// time, and each account settles against it at its own checkpoint.
#[multiversx_sc::module]
pub trait RewardAccrualModule: share_ledger::ShareLedgerModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: claim
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) -> BigUint {
        let caller = self.blockchain().get_caller();

        self.update_accumulator();
        let stored = self.reward_per_unit_stored().get();
        let reward = self.earned_against(&caller, &stored);
        require!(reward > 0u64, ERR_NOTHING_TO_CLAIM);

        let reserve = self.reward_reserve().get();
        require!(reward <= reserve, ERR_ASSET_TRANSFER_FAILED);

        self.reward_checkpoint(&caller).set(RewardCheckpoint {
            reward_per_unit_paid: stored,
            accrued_reward: BigUint::zero(),
        });
        self.reward_reserve().set(&reserve - &reward);

        self.reward_claimed_event(&caller, &reward);

        let reward_token = self.reward_token().get();
        self.send().direct(&caller, &reward_token, 0, &reward);

        reward
    }

    // ========================================================
    // ENDPOINT: setRewardRate
    // The old rate is settled up to now before the new one applies.
    // ========================================================

    #[only_owner]
    #[endpoint(setRewardRate)]
    fn set_reward_rate(&self, rate: BigUint) {
        self.update_accumulator();
        self.reward_rate().set(&rate);

        self.reward_rate_updated_event(self.blockchain().get_block_timestamp(), &rate);
    }

    #[payable("*")]
    #[endpoint(fundRewards)]
    fn fund_rewards(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.reward_token().get() && payment.amount > 0u64,
            ERR_INVALID_AMOUNT
        );

        self.reward_reserve().update(|r| *r += &payment.amount);

        self.rewards_funded_event(&caller, &payment.amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Must run before any balance change and before any checkpoint read.
    fn update_accumulator(&self) {
        let now = self.blockchain().get_block_timestamp();
        let stored = self.reward_per_unit_at(now);
        self.reward_per_unit_stored().set(&stored);
        self.last_update_timestamp().set(now);
    }

    /// Accumulator value as it would read after an update at `now`.
    fn reward_per_unit_at(&self, now: u64) -> BigUint {
        let stored = self.reward_per_unit_stored().get();
        let last = self.last_update_timestamp().get();
        let total_units = self.total_units().get();
        if total_units == 0u64 || now <= last {
            return stored;
        }

        let elapsed = BigUint::from(now - last);
        stored + elapsed * self.reward_rate().get() * BigUint::from(REWARD_SCALE) / total_units
    }

    fn load_checkpoint(&self, account: &ManagedAddress) -> RewardCheckpoint<Self::Api> {
        if self.reward_checkpoint(account).is_empty() {
            return RewardCheckpoint::default();
        }
        self.reward_checkpoint(account).get()
    }

    fn earned_against(&self, account: &ManagedAddress, reward_per_unit: &BigUint) -> BigUint {
        let checkpoint = self.load_checkpoint(account);
        let balance = self.units(account).get();
        let delta = reward_per_unit - &checkpoint.reward_per_unit_paid;

        balance * delta / BigUint::from(REWARD_SCALE) + checkpoint.accrued_reward
    }

    /// Settles everything `account` earned up to the stored accumulator.
    fn checkpoint_account(&self, account: &ManagedAddress) {
        let stored = self.reward_per_unit_stored().get();
        let accrued = self.earned_against(account, &stored);

        self.reward_checkpoint(account).set(RewardCheckpoint {
            reward_per_unit_paid: stored,
            accrued_reward: accrued,
        });
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Live figure, including accrual not yet written to storage.
    #[view(getEarned)]
    fn get_earned(&self, account: &ManagedAddress) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let reward_per_unit = self.reward_per_unit_at(now);
        self.earned_against(account, &reward_per_unit)
    }

    #[view(getRewardCheckpoint)]
    fn get_reward_checkpoint(&self, account: &ManagedAddress) -> RewardCheckpoint<Self::Api> {
        self.load_checkpoint(account)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getRewardToken)]
    #[storage_mapper("rewardToken")]
    fn reward_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getRewardRate)]
    #[storage_mapper("rewardRate")]
    fn reward_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getRewardPerUnitStored)]
    #[storage_mapper("rewardPerUnitStored")]
    fn reward_per_unit_stored(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastUpdateTimestamp")]
    fn last_update_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(getRewardReserve)]
    #[storage_mapper("rewardReserve")]
    fn reward_reserve(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("rewardCheckpoint")]
    fn reward_checkpoint(
        &self,
        account: &ManagedAddress,
    ) -> SingleValueMapper<RewardCheckpoint<Self::Api>>;
}
