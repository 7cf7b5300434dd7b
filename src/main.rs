fn main() {
    gas_init::app::cli::run();
}
