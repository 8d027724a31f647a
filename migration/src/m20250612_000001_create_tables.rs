use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::ProfileName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::HackerrankHandle).string().null())
                    .col(ColumnDef::new(Users::LeetcodeHandle).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::LastSyncedAt).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::TeacherId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Classes::ClassName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::Description).text().null())
                    .col(
                        ColumnDef::new(Classes::InviteCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classes::Table, Classes::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级用户关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassUsers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassUsers::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(ClassUsers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(ClassUsers::Role).string().not_null())
                    .col(ColumnDef::new(ClassUsers::JoinedAt).big_integer().not_null())
                    .col(ColumnDef::new(ClassUsers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassUsers::Table, ClassUsers::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassUsers::Table, ClassUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_users_class_user")
                    .table(ClassUsers::Table)
                    .col(ClassUsers::ClassId)
                    .col(ClassUsers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建题目表（外部平台题目池）
        manager
            .create_table(
                Table::create()
                    .table(Problems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Problems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Problems::Platform).string().not_null())
                    .col(ColumnDef::new(Problems::Slug).string().not_null())
                    .col(ColumnDef::new(Problems::Title).string().not_null())
                    .col(ColumnDef::new(Problems::Url).string().null())
                    .col(ColumnDef::new(Problems::Difficulty).string().null())
                    .col(ColumnDef::new(Problems::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Problems::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Problems::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Problems::Table, Problems::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_problems_platform_slug")
                    .table(Problems::Table)
                    .col(Problems::Platform)
                    .col(Problems::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::Deadline).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业题目关联表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentProblems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentProblems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentProblems::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentProblems::ProblemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentProblems::Points)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignmentProblems::Table, AssignmentProblems::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssignmentProblems::Table, AssignmentProblems::ProblemId)
                            .to(Problems::Table, Problems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_problems_pair")
                    .table(AssignmentProblems::Table)
                    .col(AssignmentProblems::AssignmentId)
                    .col(AssignmentProblems::ProblemId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建外部提交记录表（由轮询器对账写入）
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submissions::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::ProblemId).big_integer().null())
                    .col(ColumnDef::new(Submissions::Platform).string().not_null())
                    .col(ColumnDef::new(Submissions::ExternalKey).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::ChallengeName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::Language).string().null())
                    .col(ColumnDef::new(Submissions::Verdict).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SyncedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::ProblemId)
                            .to(Problems::Table, Problems::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_user_platform_key")
                    .table(Submissions::Table)
                    .col(Submissions::UserId)
                    .col(Submissions::Platform)
                    .col(Submissions::ExternalKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建限时测试表
        manager
            .create_table(
                Table::create()
                    .table(CodingTests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodingTests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CodingTests::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(CodingTests::Title).string().not_null())
                    .col(ColumnDef::new(CodingTests::Description).text().null())
                    .col(
                        ColumnDef::new(CodingTests::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodingTests::WindowStartsAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodingTests::WindowEndsAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodingTests::PenaltyPoints)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CodingTests::CreatedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodingTests::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodingTests::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CodingTests::Table, CodingTests::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CodingTests::Table, CodingTests::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建测试题目表
        manager
            .create_table(
                Table::create()
                    .table(TestProblems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestProblems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestProblems::TestId).big_integer().not_null())
                    .col(ColumnDef::new(TestProblems::Ordinal).integer().not_null())
                    .col(ColumnDef::new(TestProblems::Title).string().not_null())
                    .col(ColumnDef::new(TestProblems::Statement).text().not_null())
                    .col(ColumnDef::new(TestProblems::Stdin).text().not_null())
                    .col(
                        ColumnDef::new(TestProblems::ExpectedOutput)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestProblems::MaxScore)
                            .double()
                            .not_null()
                            .default(100.0),
                    )
                    .col(
                        ColumnDef::new(TestProblems::TimeLimitMs)
                            .integer()
                            .not_null()
                            .default(2000),
                    )
                    .col(
                        ColumnDef::new(TestProblems::MemoryLimitKb)
                            .integer()
                            .not_null()
                            .default(262144),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestProblems::Table, TestProblems::TestId)
                            .to(CodingTests::Table, CodingTests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_problems_test_ordinal")
                    .table(TestProblems::Table)
                    .col(TestProblems::TestId)
                    .col(TestProblems::Ordinal)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建测试会话表（每个学生每场测试一条）
        manager
            .create_table(
                Table::create()
                    .table(TestSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestSessions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TestSessions::TestId).big_integer().not_null())
                    .col(ColumnDef::new(TestSessions::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(TestSessions::StartedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestSessions::DeadlineAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestSessions::FinishedAt).big_integer().null())
                    .col(ColumnDef::new(TestSessions::Status).string().not_null())
                    .col(
                        ColumnDef::new(TestSessions::Score)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestSessions::Table, TestSessions::TestId)
                            .to(CodingTests::Table, CodingTests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestSessions::Table, TestSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_sessions_test_user")
                    .table(TestSessions::Table)
                    .col(TestSessions::TestId)
                    .col(TestSessions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建测试违规处罚表
        manager
            .create_table(
                Table::create()
                    .table(TestPenalties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestPenalties::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestPenalties::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestPenalties::Kind).string().not_null())
                    .col(ColumnDef::new(TestPenalties::Points).double().not_null())
                    .col(ColumnDef::new(TestPenalties::Note).string().null())
                    .col(
                        ColumnDef::new(TestPenalties::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestPenalties::Table, TestPenalties::SessionId)
                            .to(TestSessions::Table, TestSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建测试代码提交表（经评测机评测）
        manager
            .create_table(
                Table::create()
                    .table(TestSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestSubmissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestSubmissions::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestSubmissions::TestProblemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestSubmissions::LanguageId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TestSubmissions::SourceCode)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestSubmissions::JudgeToken).string().null())
                    .col(ColumnDef::new(TestSubmissions::Verdict).string().not_null())
                    .col(ColumnDef::new(TestSubmissions::ExecTimeMs).integer().null())
                    .col(ColumnDef::new(TestSubmissions::MemoryKb).integer().null())
                    .col(
                        ColumnDef::new(TestSubmissions::Score)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TestSubmissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestSubmissions::JudgedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestSubmissions::Table, TestSubmissions::SessionId)
                            .to(TestSessions::Table, TestSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestSubmissions::Table, TestSubmissions::TestProblemId)
                            .to(TestProblems::Table, TestProblems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_test_submissions_pending")
                    .table(TestSubmissions::Table)
                    .col(TestSubmissions::Verdict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestPenalties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestProblems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CodingTests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentProblems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Problems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    ProfileName,
    AvatarUrl,
    HackerrankHandle,
    LeetcodeHandle,
    LastLogin,
    LastSyncedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    Id,
    TeacherId,
    ClassName,
    Description,
    InviteCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassUsers {
    Table,
    Id,
    ClassId,
    UserId,
    Role,
    JoinedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Problems {
    Table,
    Id,
    Platform,
    Slug,
    Title,
    Url,
    Difficulty,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    ClassId,
    Title,
    Description,
    Deadline,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssignmentProblems {
    Table,
    Id,
    AssignmentId,
    ProblemId,
    Points,
}

#[derive(DeriveIden)]
enum Submissions {
    Table,
    Id,
    UserId,
    ProblemId,
    Platform,
    ExternalKey,
    ChallengeName,
    Language,
    Verdict,
    SubmittedAt,
    SyncedAt,
}

#[derive(DeriveIden)]
enum CodingTests {
    Table,
    Id,
    ClassId,
    Title,
    Description,
    DurationMinutes,
    WindowStartsAt,
    WindowEndsAt,
    PenaltyPoints,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TestProblems {
    Table,
    Id,
    TestId,
    Ordinal,
    Title,
    Statement,
    Stdin,
    ExpectedOutput,
    MaxScore,
    TimeLimitMs,
    MemoryLimitKb,
}

#[derive(DeriveIden)]
enum TestSessions {
    Table,
    Id,
    TestId,
    UserId,
    StartedAt,
    DeadlineAt,
    FinishedAt,
    Status,
    Score,
}

#[derive(DeriveIden)]
enum TestPenalties {
    Table,
    Id,
    SessionId,
    Kind,
    Points,
    Note,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TestSubmissions {
    Table,
    Id,
    SessionId,
    TestProblemId,
    LanguageId,
    SourceCode,
    JudgeToken,
    Verdict,
    ExecTimeMs,
    MemoryKb,
    Score,
    SubmittedAt,
    JudgedAt,
}
