//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignment_problems;
pub mod assignments;
pub mod class_users;
pub mod classes;
pub mod coding_tests;
pub mod judge_instances;
pub mod problems;
pub mod submissions;
pub mod test_penalties;
pub mod test_problems;
pub mod test_sessions;
pub mod test_submissions;
pub mod users;
