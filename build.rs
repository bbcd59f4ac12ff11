fn main() {
    // ESP-IDF link args are only relevant when the espidf feature set is
    // active; host builds (library + tests) must not require the toolchain.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
