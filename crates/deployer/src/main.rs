use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(
        "warn,contracts=debug,deployer=debug",
        tracing::Level::ERROR.into(),
    );
    tracing::info!("running deployer with validated arguments:\n{}", args);
    if let Err(err) = deployer::main(args).await {
        tracing::error!("deployment failed: {err:?}");
        std::process::exit(1);
    }
}
