//! Kitchen Server - 餐厅点餐系统后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SQLite (sqlx) 存储，仓储接口 + 工作单元事务
//! - **服务** (`services`): 单品、菜单、桌台、订单、团体桌业务规则
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! kitchen-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 连接池、仓储接口、SQLite 实现
//! ├── services/      # 业务用例与校验规则
//! ├── api/           # HTTP 路由、处理器、响应组装
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

use tracing_appender::non_blocking::WorkerGuard;

/// 设置运行环境: 加载 `.env`、创建工作目录、初始化日志
///
/// 返回的 guard 需持有至进程退出
pub fn setup_environment() -> std::io::Result<(Config, Option<WorkerGuard>)> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    std::fs::create_dir_all(&config.work_dir)?;
    let log_dir = config.log_dir();
    let file_dir = config.is_production().then_some(log_dir.as_path());
    let guard = init_logger_with_file(Some(&config.log_level), config.log_json, file_dir);

    Ok((config, guard))
}

pub fn print_banner() {
    println!(
        r#"
    __ __ _ __       __
   / //_/(_) /______/ /_  ___  ____
  / ,<  / / __/ ___/ __ \/ _ \/ __ \
 / /| |/ / /_/ /__/ / / /  __/ / / /
/_/ |_/_/\__/\___/_/ /_/\___/_/ /_/
    "#
    );
}
