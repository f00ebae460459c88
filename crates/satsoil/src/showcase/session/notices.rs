use serde::Serialize;

/// Structured user-facing feedback emitted by session actions.
///
/// The coordinator emits these values through [`NoticePublisher`] and
/// leaves it to the presentation layer how to surface them (toast,
/// log, dialog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notice {
    WatchlistAdded { farm_name: String },
    WatchlistAlreadyPresent { farm_name: String },
    WatchlistRemoved { farm_name: String },
    InvestPrompt { step: &'static str, message: &'static str },
}

impl Notice {
    /// Japanese display message for the notice.
    pub fn message(&self) -> String {
        match self {
            Notice::WatchlistAdded { farm_name } => {
                format!("{farm_name} をウォッチリストに追加しました")
            }
            Notice::WatchlistAlreadyPresent { farm_name } => {
                format!("{farm_name} は既にウォッチリストに存在します")
            }
            Notice::WatchlistRemoved { farm_name } => {
                format!("{farm_name} をウォッチリストから削除しました")
            }
            Notice::InvestPrompt { message, .. } => (*message).to_string(),
        }
    }
}

/// Outbound notice hook; implementations collect, log, or toast.
///
/// Publishing is fire-and-forget: notices are informational, never
/// error signals, so the hook cannot fail.
pub trait NoticePublisher: Send + Sync {
    fn publish(&self, notice: Notice);
}
