fn main() {
    multiversx_sc_meta_lib::cli_main::<governed_vault::AbiProvider>();
}
