//! 预导入模块，方便使用

pub use super::assignment_problems::{
    ActiveModel as AssignmentProblemActiveModel, Entity as AssignmentProblems,
    Model as AssignmentProblemModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::class_users::{
    ActiveModel as ClassUserActiveModel, Entity as ClassUsers, Model as ClassUserModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::coding_tests::{
    ActiveModel as CodingTestActiveModel, Entity as CodingTests, Model as CodingTestModel,
};
pub use super::judge_instances::{
    ActiveModel as JudgeInstanceActiveModel, Entity as JudgeInstances, Model as JudgeInstanceModel,
};
pub use super::problems::{
    ActiveModel as ProblemActiveModel, Entity as Problems, Model as ProblemModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::test_penalties::{
    ActiveModel as TestPenaltyActiveModel, Entity as TestPenalties, Model as TestPenaltyModel,
};
pub use super::test_problems::{
    ActiveModel as TestProblemActiveModel, Entity as TestProblems, Model as TestProblemModel,
};
pub use super::test_sessions::{
    ActiveModel as TestSessionActiveModel, Entity as TestSessions, Model as TestSessionModel,
};
pub use super::test_submissions::{
    ActiveModel as TestSubmissionActiveModel, Entity as TestSubmissions,
    Model as TestSubmissionModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
