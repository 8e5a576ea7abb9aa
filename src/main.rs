fn main() -> anyhow::Result<()> {
    reading_list::interface::logging::init();
    reading_list::interface::cli::run(std::env::args().skip(1))
}
