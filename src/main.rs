use anyhow::Context;
use cnc_launch::core::launch::{self, Invocation};
use cnc_launch::utils::{logger, validation::Validate};
use cnc_launch::domain::ports::RecentStore;
use cnc_launch::{LauncherConfig, Launcher, LinePrompt, Logger};

fn main() -> anyhow::Result<()> {
    let mut console = Logger::new();

    let parsed = match launch::parse_args(std::env::args_os()) {
        Ok(Invocation::Launch(parsed)) => parsed,
        Ok(Invocation::Help) => {
            launch::print_usage(&mut console);
            std::process::exit(0);
        }
        Err(e) => {
            console.always(&[&e.user_friendly_message()]);
            launch::print_usage(&mut console);
            std::process::exit(1);
        }
    };

    // 載入配置，失敗時 exit code 1
    let ini = parsed.args.ini.as_deref();
    let config = LauncherConfig::load(ini).with_context(|| match ini {
        Some(path) => format!("Failed to load configuration from '{}'", path),
        None => "Failed to load configuration".to_string(),
    })?;

    logger::init_diagnostics(config.log_level(), config.diagnostic_format());

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    console.set_level(config.log_level());
    console.always(&[&"Starting", &launch::PROGRAM]);

    let history = config.history();
    tracing::debug!(
        "Recent history: {} of {} entries",
        history.len(),
        history.capacity()
    );

    let mut prompt = LinePrompt::stdin();
    let plan = Launcher::new(&config).plan(&parsed, &history, &mut prompt, &mut console);

    for line in plan.summary_lines() {
        console.info(&[&line]);
    }
    for file in &plan.files {
        console.always(&[&"Loading", file]);
    }
    if plan.run {
        if let Some(last) = plan.files.last() {
            console.always(&[&"Running", last]);
        }
    }

    tracing::info!("✅ Launch plan ready");
    Ok(())
}
