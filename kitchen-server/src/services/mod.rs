//! 服务层 - 业务用例
//!
//! Every use case is a free async function over a [`UnitOfWork`](crate::db::UnitOfWork):
//! load → validate ([`rules`]) → mutate → save → return. Callers own the
//! transaction and decide when to commit.

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod rules;
pub mod table_group;

#[cfg(test)]
pub(crate) mod test_support;
