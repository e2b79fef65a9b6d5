use clap::Parser;
use roman_adder::core::batch::{load_batch, run_batch, BatchOutcome};
use roman_adder::utils::{logger, validation::Validate};
use roman_adder::{CliConfig, RomanAdder, RomanError, Settings, TomlConfig};

fn fail(e: &RomanError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn load_settings(config: &CliConfig) -> roman_adder::Result<Settings> {
    let file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };
    Ok(Settings::resolve(config.strategy, config.verify, file.as_ref()))
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先驗證參數；失敗時用預設日誌輸出錯誤
    if let Err(e) = config.validate() {
        logger::init_cli_logger(logger::filter_for(None, config.verbose));
        fail(&e);
    }

    // 設定檔需要在日誌初始化之前載入，才能套用 logging.level
    let settings = load_settings(&config);
    let (level, json_logs) = match &settings {
        Ok(s) => (s.log_level.clone(), s.json_logs),
        Err(_) => (None, false),
    };
    let filter = logger::filter_for(level.as_deref(), config.verbose);
    if json_logs {
        logger::init_json_logger(filter);
    } else {
        logger::init_cli_logger(filter);
    }

    let settings = settings.unwrap_or_else(|e| fail(&e));
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let adder = RomanAdder::from_config(&settings);

    if let Some(path) = &config.batch {
        let entries = load_batch(path).unwrap_or_else(|e| fail(&e));
        tracing::info!("Adding {} pairs from {}", entries.len(), path.display());

        let outcomes = run_batch(&adder, &entries);
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();

        if config.json {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        } else {
            for outcome in &outcomes {
                match outcome {
                    BatchOutcome::Ok(a) => println!("{} + {} = {}", a.augend, a.addend, a.sum),
                    BatchOutcome::Error { index, message } => {
                        println!("#{}: error: {}", index, message)
                    }
                }
            }
        }

        if failed > 0 {
            tracing::warn!("{} of {} pairs were rejected", failed, outcomes.len());
            std::process::exit(1);
        }
        return Ok(());
    }

    // validate() guarantees both numerals are present here
    let augend = config.augend.as_deref().unwrap_or_default();
    let addend = config.addend.as_deref().unwrap_or_default();

    match adder.addition(augend, addend) {
        Ok(addition) if config.json => println!("{}", serde_json::to_string(&addition)?),
        Ok(addition) => println!("{}", addition.sum),
        Err(e) => fail(&e),
    }

    Ok(())
}
