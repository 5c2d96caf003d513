fn main() {
    multiversx_sc_meta_lib::cli_main::<vault_collaborator_mock::AbiProvider>();
}
