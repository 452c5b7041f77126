use crossterm::style::Stylize;
use quickinstall::cli::Cli;
use quickinstall::config::Config;
use quickinstall::flow::Session;
use quickinstall::package_manager::DuctRunner;
use quickinstall::prompt::InquirePrompter;
use quickinstall::registry::NpmRegistry;
use quickinstall::{logger, ui};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    logger::init(cli.debug);

    let workdir = std::env::current_dir().unwrap_or_else(|_| ".".into());

    // 配置文件中的 debug 与命令行参数取或
    let config = Config::load(&workdir);
    let debug = config.effective_debug(cli.debug);
    logger::set_debug(debug);

    log::debug!(
        "Started on {}",
        chrono::Local::now().format("%m/%d/%Y at %H:%M:%S")
    );
    ui::intro("Quick Install");

    let registry = NpmRegistry::new(config.registry.clone(), config.search_limit);
    let mut session =
        Session::new(InquirePrompter, registry, DuctRunner, workdir).with_debug(debug);

    match session.run().await {
        Ok(()) => {
            ui::outro("Thanks for using quickinstall, we hope to see you use this CLI again soon!");
        }
        Err(termination) => {
            ui::cancel(&termination.to_string());
            if termination.exit_code() != 0 {
                let hint = "quickinstall could not finish, run with --debug for details.";
                eprintln!("{}", hint.dark_grey());
            }
            std::process::exit(termination.exit_code());
        }
    }
}
