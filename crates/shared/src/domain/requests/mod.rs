mod withdraw;

pub use self::withdraw::{
    CreateWithdrawRequest, DebitWalletRequest, HistoryQuery, NewWithdrawRecord,
};
