multiversx_sc::imports!();

use crate::{
    compliance_registry_proxy,
    errors::{ERR_INVALID_ROLE, ERR_UNAUTHORIZED},
    events,
};

/// May open governance proposals.
pub const ROLE_PROPOSER: u8 = 0b01;
/// May flip the authorization flag of any account.
pub const ROLE_COMPLIANCE: u8 = 0b10;

const ALL_ROLES: u8 = ROLE_PROPOSER | ROLE_COMPLIANCE;

/// Identity bookkeeping: authorization (compliance) status, role flags and
/// the set of every account that ever interacted with the vault.
#[multiversx_sc::module]
pub trait AccountRegistryModule: events::EventsModule {
    // ========================================================
    // ENDPOINT: setAuthorized
    // Owner or a compliance officer records the external
    // KYC / whitelist verdict for an identity.
    // ========================================================

    #[endpoint(setAuthorized)]
    fn set_authorized(&self, account: ManagedAddress, authorized: bool) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address()
                || self.has_role(&caller, ROLE_COMPLIANCE),
            ERR_UNAUTHORIZED
        );

        self.authorized(&account).set(authorized);
        self.touch_account(&account);

        self.authorization_changed_event(&account, &caller, authorized);
    }

    #[only_owner]
    #[endpoint(grantRole)]
    fn grant_role(&self, account: ManagedAddress, role: u8) {
        require!(role != 0 && role & !ALL_ROLES == 0, ERR_INVALID_ROLE);

        let roles = self.roles(&account).update(|r| {
            *r |= role;
            *r
        });
        self.touch_account(&account);

        self.role_changed_event(&account, roles);
    }

    #[only_owner]
    #[endpoint(revokeRole)]
    fn revoke_role(&self, account: ManagedAddress, role: u8) {
        require!(role != 0 && role & !ALL_ROLES == 0, ERR_INVALID_ROLE);

        let roles = self.roles(&account).update(|r| {
            *r &= !role;
            *r
        });

        self.role_changed_event(&account, roles);
    }

    /// Delegates every authorization check to an external registry.
    /// While set, the locally stored flags are ignored.
    #[only_owner]
    #[endpoint(setComplianceRegistry)]
    fn set_compliance_registry(&self, registry: ManagedAddress) {
        self.compliance_registry_address().set(&registry);
    }

    #[only_owner]
    #[endpoint(clearComplianceRegistry)]
    fn clear_compliance_registry(&self) {
        self.compliance_registry_address().clear();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Single capability check run at every gated entry point.
    fn require_authorized(&self, identity: &ManagedAddress) {
        require!(self.is_authorized(identity), ERR_UNAUTHORIZED);
    }

    fn has_role(&self, identity: &ManagedAddress, role: u8) -> bool {
        self.roles(identity).get() & role == role
    }

    /// Accounts are created on first interaction and never removed.
    fn touch_account(&self, account: &ManagedAddress) {
        self.accounts().insert(account.clone());
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAuthorized)]
    fn is_authorized(&self, identity: &ManagedAddress) -> bool {
        if self.compliance_registry_address().is_empty() {
            return self.authorized(identity).get();
        }

        let registry = self.compliance_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(compliance_registry_proxy::ComplianceRegistryProxy)
            .is_authorized(identity.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getRoles)]
    fn get_roles(&self, account: &ManagedAddress) -> u8 {
        self.roles(account).get()
    }

    #[view(getAccountCount)]
    fn get_account_count(&self) -> usize {
        self.accounts().len()
    }

    #[view(getAccounts)]
    fn get_accounts(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let total = self.accounts().len();
        let start = usize::try_from(from).unwrap_or(usize::MAX);
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        let end = core::cmp::min(start.saturating_add(count), total);

        for (idx, account) in self.accounts().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(account);
            }
        }
        result
    }

    #[view(getComplianceRegistry)]
    #[storage_mapper("complianceRegistryAddress")]
    fn compliance_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("authorized")]
    fn authorized(&self, account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("roles")]
    fn roles(&self, account: &ManagedAddress) -> SingleValueMapper<u8>;

    #[storage_mapper("accounts")]
    fn accounts(&self) -> UnorderedSetMapper<ManagedAddress>;
}
