mod command;
mod query;

#[cfg(test)]
pub(crate) mod mocks;

pub use self::command::{WithdrawCommandService, WithdrawCommandServiceDeps};
pub use self::query::WithdrawQueryService;
