use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// 统一响应结构 `{status, statuscode, data}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub statuscode: u16,
    pub data: T,
}

/// 仅包含提示消息的数据体，错误响应也使用它
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultMessage {
    pub result: String,
}

impl<T> ApiResponse<T> {
    pub fn success(statuscode: u16, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            statuscode,
            data,
        }
    }
}

impl ApiResponse<ResultMessage> {
    pub fn error(statuscode: u16, message: String) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            statuscode,
            data: ResultMessage { result: message },
        }
    }

    pub fn message(statuscode: u16, message: &str) -> Self {
        Self::success(
            statuscode,
            ResultMessage {
                result: message.to_string(),
            },
        )
    }
}
