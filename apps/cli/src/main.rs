fn main() -> anyhow::Result<()> {
    dictcard_cli::run()
}
