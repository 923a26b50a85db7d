mod command;
mod query;

pub use self::command::AccountCommandRepository;
pub use self::query::AccountQueryRepository;
