fn main() {
    ccdiff::cli::run();
}
