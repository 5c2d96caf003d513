multiversx_sc::imports!();

use crate::{
    errors::{ERR_INSUFFICIENT_UNITS, ERR_INVALID_AMOUNT},
    events,
};

/// Share price is quoted in assets per 10^18 units.
pub const SHARE_PRICE_PRECISION: u64 = 1_000_000_000_000_000_000;

/// Converts pooled assets to and from proportional ownership units.
///
/// Invariants:
/// * `totalUnits == 0` exactly when `totalAssets == 0`
/// * the sum of all `units(account)` equals `totalUnits`
/// * every conversion rounds down, so no holder can redeem more than it put in
#[multiversx_sc::module]
pub trait ShareLedgerModule: events::EventsModule {
    // ========================================================
    // INTERNAL: conversions (floor division)
    // ========================================================

    fn units_for_assets(&self, amount: &BigUint) -> BigUint {
        let total_units = self.total_units().get();
        if total_units == 0u64 {
            return amount.clone();
        }
        let total_assets = self.total_assets().get();
        (amount * &total_units) / &total_assets
    }

    fn assets_for_units(&self, units: &BigUint) -> BigUint {
        let total_units = self.total_units().get();
        if total_units == 0u64 {
            return BigUint::zero();
        }
        let total_assets = self.total_assets().get();
        (units * &total_assets) / &total_units
    }

    // ========================================================
    // INTERNAL: ledger mutation
    // ========================================================

    /// Mints units for `amount` of freshly received assets.
    /// A deposit too small to earn a single unit is rejected rather than
    /// silently donated to existing holders.
    fn mint_units(&self, owner: &ManagedAddress, amount: &BigUint) -> BigUint {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);

        let units = self.units_for_assets(amount);
        require!(units > 0u64, ERR_INVALID_AMOUNT);

        self.total_assets().update(|a| *a += amount);
        self.total_units().update(|u| *u += &units);
        self.units(owner).update(|b| *b += &units);

        units
    }

    /// Burns `units` from `owner` and returns the assets they redeem.
    fn burn_units(&self, owner: &ManagedAddress, units: &BigUint) -> BigUint {
        require!(*units > 0u64, ERR_INVALID_AMOUNT);

        let balance = self.units(owner).get();
        require!(units <= &balance, ERR_INSUFFICIENT_UNITS);

        let amount = self.assets_for_units(units);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.units(owner).set(&balance - units);
        let remaining_units = self.total_units().update(|u| {
            *u -= units;
            u.clone()
        });

        // Last unit out takes the pool with it; nothing stays unredeemable.
        if remaining_units == 0u64 {
            self.total_assets().clear();
        } else {
            self.total_assets().update(|a| *a -= &amount);
        }

        amount
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Units a deposit of `amount` would mint right now (0 if it would be rejected).
    #[view(previewDeposit)]
    fn preview_deposit(&self, amount: BigUint) -> BigUint {
        if amount == 0u64 {
            return BigUint::zero();
        }
        self.units_for_assets(&amount)
    }

    /// Assets a withdrawal of `units` would pay out right now.
    #[view(previewWithdraw)]
    fn preview_withdraw(&self, units: BigUint) -> BigUint {
        if units > self.total_units().get() {
            return BigUint::zero();
        }
        self.assets_for_units(&units)
    }

    #[view(getSharePrice)]
    fn get_share_price(&self) -> BigUint {
        let total_units = self.total_units().get();
        if total_units == 0u64 {
            return BigUint::from(SHARE_PRICE_PRECISION);
        }
        (self.total_assets().get() * BigUint::from(SHARE_PRICE_PRECISION)) / total_units
    }

    #[view(getUnits)]
    fn get_units(&self, account: &ManagedAddress) -> BigUint {
        self.units(account).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAssetToken)]
    #[storage_mapper("assetToken")]
    fn asset_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getTotalAssets)]
    #[storage_mapper("totalAssets")]
    fn total_assets(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalUnits)]
    #[storage_mapper("totalUnits")]
    fn total_units(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("units")]
    fn units(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
