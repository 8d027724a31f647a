//! 测试代码提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub test_problem_id: i64,
    pub language_id: i32,
    #[sea_orm(column_type = "Text")]
    pub source_code: String,
    pub judge_token: Option<String>,
    pub verdict: String,
    pub exec_time_ms: Option<i32>,
    pub memory_kb: Option<i32>,
    pub score: f64,
    pub submitted_at: i64,
    pub judged_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_sessions::Entity",
        from = "Column::SessionId",
        to = "super::test_sessions::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::test_problems::Entity",
        from = "Column::TestProblemId",
        to = "super::test_problems::Column::Id"
    )]
    Problem,
}

impl Related<super::test_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::test_problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// 转换为业务模型；`with_source` 控制是否携带源代码
    pub fn into_test_submission(
        self,
        with_source: bool,
    ) -> crate::models::test_sessions::entities::TestSubmission {
        use crate::models::test_sessions::entities::{TestSubmission, TestVerdict};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        TestSubmission {
            id: self.id,
            session_id: self.session_id,
            test_problem_id: self.test_problem_id,
            language_id: self.language_id,
            source_code: with_source.then_some(self.source_code),
            verdict: TestVerdict::from_str(&self.verdict).unwrap_or(TestVerdict::JudgeError),
            exec_time_ms: self.exec_time_ms,
            memory_kb: self.memory_kb,
            score: self.score,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
            judged_at: self
                .judged_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        }
    }
}
