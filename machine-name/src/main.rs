use machine_name::cli::Args;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logger::init();

    let mut args = Args::from_cli();
    args.or_env_mut()?;

    let stdout = std::io::stdout();
    args.run(&mut stdout.lock())
}
