use nova_studio::{
    cli::{prompt, Presenter, Studio, TerminalPrompter, Workflow},
    logger, MenuChoice, NovaClient, StudioConfig,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    if let Err(e) = logger::init_with_config(logger::LoggerConfig::from_env()) {
        eprintln!("{}", e);
    }
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    let config = StudioConfig::from_env();
    logger::log_config_info(&config);

    let presenter = Presenter::new();
    presenter.banner("🎨 Bedrock Nova Studio");

    let mut prompter = TerminalPrompter::new();
    let workflow: Workflow = match prompt::choose(&mut prompter, "What would you like to create?") {
        Ok(workflow) => workflow,
        Err(e) => {
            log::error!("Could not read a choice: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match NovaClient::new(&config).await {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to initialize AWS clients: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let studio = Studio::new(client, config);

    match studio.run(workflow, &mut prompter, &presenter).await {
        Ok(outcome) => {
            log::debug!("Workflow finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{} failed: {}", workflow.tag(), e);
            presenter.failure(&format!("Failed: {}", e));
            ExitCode::FAILURE
        }
    }
}
