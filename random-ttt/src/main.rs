use random_ttt::{config::Config, harness};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    let report = harness::run(&config)?;
    println!("{report}");
    Ok(())
}
