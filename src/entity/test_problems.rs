//! 测试题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub test_id: i64,
    pub ordinal: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub statement: String,
    #[sea_orm(column_type = "Text")]
    pub stdin: String,
    #[sea_orm(column_type = "Text")]
    pub expected_output: String,
    pub max_score: f64,
    pub time_limit_ms: i32,
    pub memory_limit_kb: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coding_tests::Entity",
        from = "Column::TestId",
        to = "super::coding_tests::Column::Id"
    )]
    CodingTest,
    #[sea_orm(has_many = "super::test_submissions::Entity")]
    TestSubmissions,
}

impl Related<super::coding_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CodingTest.def()
    }
}

impl Related<super::test_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_test_problem(self) -> crate::models::tests::entities::TestProblem {
        use crate::models::tests::entities::TestProblem;

        TestProblem {
            id: self.id,
            test_id: self.test_id,
            ordinal: self.ordinal,
            title: self.title,
            statement: self.statement,
            stdin: self.stdin,
            expected_output: self.expected_output,
            max_score: self.max_score,
            time_limit_ms: self.time_limit_ms,
            memory_limit_kb: self.memory_limit_kb,
        }
    }
}
