mod command;
mod query;

pub use self::command::WithdrawCommandRepository;
pub use self::query::WithdrawQueryRepository;
