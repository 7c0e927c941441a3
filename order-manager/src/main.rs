use anyhow::Context;
use order_manager::driver::{self, DriverCommand};
use order_manager::{Config, OrderManager, init_logger_with_file};

fn main() -> anyhow::Result<()> {
    // 1. 环境 (.env) 与配置
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    config.validate().context("invalid configuration")?;

    // 2. 菜单与管理器
    let menu = config.load_menu().context("failed to load menu")?;
    let manager = OrderManager::new(menu, config.seats_per_table);

    // 3. 命令: 参数 > MANAGER_COMMAND > 交互输入
    let mut stdout = std::io::stdout();
    let line = match std::env::args().nth(1).or_else(|| config.command.clone()) {
        Some(line) => line,
        None => driver::read_command(&mut std::io::stdin().lock(), &mut stdout)?,
    };

    match DriverCommand::parse(&line) {
        Some(command) => driver::run_command(&manager, command, &mut stdout)?,
        None => tracing::debug!(input = %line.trim(), "Unrecognised command, nothing to do"),
    }

    Ok(())
}
