//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_problems::{
    ActiveModel as AssignmentProblemActiveModel, Column as AssignmentProblemColumn,
    Entity as AssignmentProblems,
};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::problems::{Column as ProblemColumn, Entity as Problems};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListResponse, AssignmentProblemItem},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.map(|dt| dt.timestamp())),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("创建作业失败: {e}")))?;

        // 初始题单
        if let Some(problem_ids) = req.problem_ids {
            for problem_id in problem_ids {
                self.attach_problem_to_assignment_impl(result.id, problem_id, 100.0)
                    .await?;
            }
        }

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(created_by) = query.created_by {
            select = select.filter(Column::CreatedBy.eq(created_by));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询作业总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询作业页数失败: {e}")))?;

        let items: Vec<Assignment> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_assignment())
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let Some(existing) = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询作业失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(deadline) = update.deadline {
            model.deadline = Set(Some(deadline.timestamp()));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 向作业题单挂接题目
    pub async fn attach_problem_to_assignment_impl(
        &self,
        assignment_id: i64,
        problem_id: i64,
        points: f64,
    ) -> Result<bool> {
        // 已挂接则更新分值
        let existing = AssignmentProblems::find()
            .filter(AssignmentProblemColumn::AssignmentId.eq(assignment_id))
            .filter(AssignmentProblemColumn::ProblemId.eq(problem_id))
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题单失败: {e}")))?;

        match existing {
            Some(entry) => {
                let mut model: AssignmentProblemActiveModel = entry.into();
                model.points = Set(points);
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| CodeTrackError::database_operation(format!("更新题单失败: {e}")))?;
                Ok(false)
            }
            None => {
                let model = AssignmentProblemActiveModel {
                    assignment_id: Set(assignment_id),
                    problem_id: Set(problem_id),
                    points: Set(points),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| CodeTrackError::database_operation(format!("挂接题目失败: {e}")))?;
                Ok(true)
            }
        }
    }

    /// 从作业题单移除题目
    pub async fn detach_problem_from_assignment_impl(
        &self,
        assignment_id: i64,
        problem_id: i64,
    ) -> Result<bool> {
        let result = AssignmentProblems::delete_many()
            .filter(AssignmentProblemColumn::AssignmentId.eq(assignment_id))
            .filter(AssignmentProblemColumn::ProblemId.eq(problem_id))
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("移除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出作业题单（题目 + 分值）
    pub async fn list_assignment_problems_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentProblemItem>> {
        let entries = AssignmentProblems::find()
            .filter(AssignmentProblemColumn::AssignmentId.eq(assignment_id))
            .order_by_asc(AssignmentProblemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题单失败: {e}")))?;

        let problem_ids: Vec<i64> = entries.iter().map(|e| e.problem_id).collect();
        if problem_ids.is_empty() {
            return Ok(vec![]);
        }

        let problems = Problems::find()
            .filter(ProblemColumn::Id.is_in(problem_ids))
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目失败: {e}")))?;
        let problem_map: HashMap<i64, _> = problems.into_iter().map(|p| (p.id, p)).collect();

        let mut items = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(problem) = problem_map.get(&entry.problem_id) {
                items.push(AssignmentProblemItem {
                    problem: problem.clone().into_problem(),
                    points: entry.points,
                });
            }
        }

        Ok(items)
    }
}
