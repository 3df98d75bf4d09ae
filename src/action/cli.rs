use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::config::Cli;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::facade::traits::i_unlock::UnlockFacadeTrait;
use crate::facade::unlock_facade::UnlockFacade;
use crate::models::conversion::UnlockInput;
use crate::models::summary::RunSummary;
use crate::service::config_service::ConfigService;
use crate::service::file::FileService;
use crate::service::format::AdapterRegistry;
use crate::service::unlock::UnlockService;
use crate::utils::utils::setup_logging;

/// 解析命令列並執行；處理過程中的錯誤只寫入日誌，不影響結束碼
pub fn process_args(args: Vec<String>) -> io::Result<()> {
    let cli = Cli::parse_from(args);
    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;
    setup_logging(config.log_level)?;
    run(&config);
    Ok(())
}

/// 以內建格式庫執行一次解鎖，終止性錯誤寫入日誌一次
pub fn run(config: &AppConfig) -> Option<RunSummary> {
    let facade = build_facade(AdapterRegistry::builtin());
    match facade.execute_unlock(to_unlock_input(config)) {
        Ok(summary) => Some(summary),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}

/// 組裝批次處理器與其服務
pub fn build_facade(adapters: AdapterRegistry) -> Box<dyn UnlockFacadeTrait> {
    let unlock_service = UnlockService::new(adapters, Box::new(FileService::new()));
    Box::new(UnlockFacade::new(Box::new(FileService::new()), Box::new(unlock_service)))
}

pub fn to_unlock_input(config: &AppConfig) -> UnlockInput {
    UnlockInput {
        input_path: config.input.clone(),
        output_path: config.output.clone(),
        override_existing: config.override_existing,
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        if self.cli.input.trim().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "input path is empty"));
        }
        Ok(AppConfig {
            input: PathBuf::from(&self.cli.input),
            output: self.cli.output_path(),
            log_level: self.cli.effective_log_level(),
            override_existing: self.cli.override_existing,
        })
    }
}
