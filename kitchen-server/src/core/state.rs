use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 创建工作目录并打开数据库 (执行迁移)
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        tracing::info!(work_dir = %config.work_dir, "Server state initialized");
        Ok(Self::new(config.clone(), db))
    }
}
