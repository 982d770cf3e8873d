fn main() {
    butterfly_release::app::cli::run();
}
