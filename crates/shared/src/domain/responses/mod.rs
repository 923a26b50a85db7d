mod account;
mod withdraw;

pub use self::account::BalanceResponse;
pub use self::withdraw::{
    AdminWithdrawResponse, HistoryResponse, SubmitWithdrawResponse, WithdrawHistoryEntry,
    WithdrawListResponse,
};
