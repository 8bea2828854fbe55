fn main() -> anyhow::Result<()> {
    asuratext::cli::run_cli()
}
