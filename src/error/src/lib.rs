//! 游戏错误处理模块
//!
//! 处理战役运行过程中可能出现的错误：控制台输入结束、IO、配置文件以及无效的战斗者数据。
//! 非法的菜单输入不属于错误，由输入端就地重新提示。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// 输入流已关闭，无法再读取玩家的选择
    #[error("Input stream closed")]
    InputClosed,

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 配置文件无法解析
    #[error("Config error: {0}")]
    Config(String),

    /// 战斗者数据无效（例如最大生命值为0）
    #[error("Invalid combatant '{name}': {reason}")]
    InvalidCombatant { name: String, reason: String },
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InputClosed => "Input ended before the campaign finished".to_string(),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Roster file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to read roster file".to_string(),
            _ => format!("IO error: {}", e),
        },
        GameError::Config(msg) => format!("Roster file is malformed: {}", msg),
        _ => error.to_string(),
    }
}
